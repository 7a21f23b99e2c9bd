use id_lump_format::{Palette, PALETTE_SIZE};

/// Entry `i` is `(i, i, i)`, so every gray has an exact match.
pub fn grayscale() -> Palette {
    let mut colors = [(0, 0, 0); PALETTE_SIZE];
    for (i, color) in colors.iter_mut().enumerate() {
        *color = (i as u8, i as u8, i as u8);
    }
    Palette::new(colors)
}
