//! Builds a 64 level lighting `COLORMAP` from a 256 color palette, so a
//! software renderer can shade palettized textures with a table lookup.

mod generator;
mod nearest;

pub use generator::{dim_color, generate_colormap, is_fullbright, FULLBRIGHT_COUNT};
pub use nearest::nearest_color;

#[cfg(test)]
mod test_helpers;
