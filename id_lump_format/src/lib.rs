//! Fixed-size lumps used for software lighting: the 256 color `PLAYPAL`
//! palette and the 64 level `COLORMAP` table derived from it.
//!
//! Both lumps are raw bytes with no header, so their length is the only thing
//! that can be validated.

mod helpers;
mod lumps;

pub use helpers::LumpError;
pub use lumps::*;
