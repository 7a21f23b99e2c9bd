use std::path::Path;

use crate::{
    helpers::{read_lump_file, write_lump_file},
    LumpError,
};

/// Number of colors in a palette. Every palette index fits in a `u8`.
pub const PALETTE_SIZE: usize = 256;

/// Size of a single `PLAYPAL` palette on disk: 256 RGB triples.
pub const PALETTE_BYTES: usize = PALETTE_SIZE * 3;

/// A 256 color palette, stored as (R, G, B) tuples in index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [(u8, u8, u8); PALETTE_SIZE],
}

impl Palette {
    pub fn new(colors: [(u8, u8, u8); PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    /// Parses a raw palette lump. Anything other than exactly 768 bytes is
    /// rejected; there is no header to validate beyond that.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LumpError> {
        if bytes.len() != PALETTE_BYTES {
            return Err(LumpError::PaletteSize {
                expected: PALETTE_BYTES,
                actual: bytes.len(),
            });
        }

        let mut colors = [(0, 0, 0); PALETTE_SIZE];
        for (color, rgb) in colors.iter_mut().zip(bytes.chunks_exact(3)) {
            *color = (rgb[0], rgb[1], rgb[2]);
        }

        Ok(Self { colors })
    }

    pub fn read_lump(path: impl AsRef<Path>) -> Result<Self, LumpError> {
        Self::from_bytes(&read_lump_file(path.as_ref())?)
    }

    pub fn write_lump(&self, path: impl AsRef<Path>) -> Result<(), LumpError> {
        write_lump_file(path.as_ref(), &self.to_bytes())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.colors
            .iter()
            .flat_map(|&(r, g, b)| [r, g, b])
            .collect()
    }

    pub fn color(&self, index: u8) -> (u8, u8, u8) {
        self.colors[index as usize]
    }

    pub fn colors(&self) -> &[(u8, u8, u8); PALETTE_SIZE] {
        &self.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::test_helpers::scratch_dir;

    fn ramp_bytes() -> Vec<u8> {
        (0..PALETTE_SIZE)
            .flat_map(|i| [i as u8, (i / 2) as u8, 255 - i as u8])
            .collect()
    }

    #[test]
    fn parses_rgb_in_index_order() {
        let palette = Palette::from_bytes(&ramp_bytes()).unwrap();

        assert_eq!(palette.color(0), (0, 0, 255));
        assert_eq!(palette.color(1), (1, 0, 254));
        assert_eq!(palette.color(200), (200, 100, 55));
        assert_eq!(palette.color(255), (255, 127, 0));
        assert_eq!(palette.to_bytes(), ramp_bytes());
    }

    #[test]
    fn rejects_wrong_sizes() {
        let bytes = ramp_bytes();

        for len in [0, 767, 769, 1536] {
            let mut input = bytes.clone();
            input.resize(len, 0);

            match Palette::from_bytes(&input) {
                Err(LumpError::PaletteSize { expected, actual }) => {
                    assert_eq!(expected, 768);
                    assert_eq!(actual, len);
                }
                other => panic!("expected a size error for {len} bytes, got {other:?}"),
            }
        }
    }

    #[test]
    fn reads_lump_from_disk() {
        let dir = scratch_dir("palette-read");
        let path = dir.join("palette.lmp");
        std::fs::write(&path, ramp_bytes()).unwrap();

        let palette = Palette::read_lump(&path).unwrap();
        assert_eq!(palette.color(10), (10, 5, 245));

        let copy = dir.join("copy.lmp");
        palette.write_lump(&copy).unwrap();
        assert_eq!(std::fs::read(&copy).unwrap(), ramp_bytes());
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = scratch_dir("palette-missing");

        let err = Palette::read_lump(dir.join("nope.lmp")).unwrap_err();
        assert!(matches!(err, LumpError::OpenInput { .. }));
    }
}
