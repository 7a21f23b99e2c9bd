mod colormaps;
mod palettes;

pub use colormaps::*;
pub use palettes::*;
