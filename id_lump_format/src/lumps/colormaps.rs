use std::path::Path;

use crate::{
    helpers::{read_lump_file, write_lump_file},
    LumpError, PALETTE_SIZE,
};

/// Number of light levels in a colormap, from full brightness to darkness.
pub const LIGHT_LEVELS: usize = 64;

/// Size of a `COLORMAP` lump on disk.
pub const COLORMAP_BYTES: usize = LIGHT_LEVELS * PALETTE_SIZE;

/// A light level in `0..64`, where 0 is full brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LightLevel(u8);

impl LightLevel {
    pub const BRIGHTEST: LightLevel = LightLevel(0);
    pub const DARKEST: LightLevel = LightLevel((LIGHT_LEVELS - 1) as u8);

    /// Every light level, brightest first. `ALL[i].index() == i`.
    pub const ALL: [LightLevel; LIGHT_LEVELS] = {
        let mut levels = [LightLevel(0); LIGHT_LEVELS];
        let mut i = 0;
        while i < LIGHT_LEVELS {
            levels[i] = LightLevel(i as u8);
            i += 1;
        }
        levels
    };

    pub fn new(level: u8) -> Option<Self> {
        if (level as usize) < LIGHT_LEVELS {
            Some(Self(level))
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// LUT for converting colors to their closest darker color, based on lighting.
/// Each entry is an index into the palette the table was built from.
///
/// How to use:
/// `new_index = colormap.shade(light_level, index)`
///
/// On disk the rows are stored brightest first, so cell `(level, index)` lives
/// at byte `level * 256 + index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Colormap {
    rows: Box<[[u8; PALETTE_SIZE]; LIGHT_LEVELS]>,
}

impl Colormap {
    pub fn from_rows(rows: Box<[[u8; PALETTE_SIZE]; LIGHT_LEVELS]>) -> Self {
        Self { rows }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LumpError> {
        if bytes.len() != COLORMAP_BYTES {
            return Err(LumpError::ColormapSize {
                expected: COLORMAP_BYTES,
                actual: bytes.len(),
            });
        }

        let mut rows = Box::new([[0; PALETTE_SIZE]; LIGHT_LEVELS]);
        for (row, chunk) in rows.iter_mut().zip(bytes.chunks_exact(PALETTE_SIZE)) {
            row.copy_from_slice(chunk);
        }

        Ok(Self { rows })
    }

    pub fn read_lump(path: impl AsRef<Path>) -> Result<Self, LumpError> {
        Self::from_bytes(&read_lump_file(path.as_ref())?)
    }

    pub fn write_lump(&self, path: impl AsRef<Path>) -> Result<(), LumpError> {
        write_lump_file(path.as_ref(), &self.to_bytes())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.rows.iter().flatten().copied().collect()
    }

    pub fn shade(&self, level: LightLevel, index: u8) -> u8 {
        self.rows[level.index()][index as usize]
    }

    pub fn row(&self, level: LightLevel) -> &[u8; PALETTE_SIZE] {
        &self.rows[level.index()]
    }

    pub fn rows(&self) -> impl Iterator<Item = (LightLevel, &[u8; PALETTE_SIZE])> {
        LightLevel::ALL.into_iter().zip(self.rows.iter())
    }
}
