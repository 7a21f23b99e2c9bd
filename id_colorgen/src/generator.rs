use id_lump_format::{Colormap, LightLevel, Palette, LIGHT_LEVELS, PALETTE_SIZE};
use rayon::prelude::*;

use crate::nearest_color;

/// The last 32 palette entries are fullbright and are never dimmed.
pub const FULLBRIGHT_COUNT: usize = 32;

pub fn is_fullbright(index: u8) -> bool {
    index as usize >= PALETTE_SIZE - FULLBRIGHT_COUNT
}

/// Scales `color` for `level`, clamped to 255 per component.
///
/// `(v * (63 - level) + 16) >> 5` is `round(v * (63 - level) / 32)` in fixed
/// point, so level 0 is slightly brighter than the source color and level 63
/// is black. The result is never negative.
pub fn dim_color((r, g, b): (u8, u8, u8), level: LightLevel) -> [i32; 3] {
    let scale = i32::from(LightLevel::DARKEST.get() - level.get());

    [r, g, b].map(|v| ((i32::from(v) * scale + 16) >> 5).min(255))
}

/// Builds the 64 light levels for `palette`. Each row is independent, so rows
/// are computed in parallel.
pub fn generate_colormap(palette: &Palette) -> Colormap {
    let mut rows = Box::new([[0; PALETTE_SIZE]; LIGHT_LEVELS]);

    rows[..]
        .par_iter_mut()
        .zip(&LightLevel::ALL[..])
        .for_each(|(row, &level)| {
            for (cell, index) in row.iter_mut().zip(0..=u8::MAX) {
                *cell = if is_fullbright(index) {
                    index
                } else {
                    nearest_color(palette, dim_color(palette.color(index), level))
                };
            }
        });

    log::debug!("Generated {} light levels", LIGHT_LEVELS);
    Colormap::from_rows(rows)
}
