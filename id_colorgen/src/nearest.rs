use id_lump_format::Palette;

/// Returns the palette index closest to `rgb` by squared RGB distance.
///
/// On a tie the lowest index wins. Components outside `0..=255` are fine.
pub fn nearest_color(palette: &Palette, rgb: [i32; 3]) -> u8 {
    let mut best_index = 0;
    // Unsigned so even `i32::MIN`/`i32::MAX` targets can't overflow the sum.
    let mut best_dist = u64::MAX;

    // Note: no luminosity weighting here, the original Quake tables were built
    // with plain RGB distance.
    for (index, &(r, g, b)) in (0..=u8::MAX).zip(palette.colors().iter()) {
        let dist: u64 = [r, g, b]
            .iter()
            .zip(rgb.iter())
            .map(|(&c, &target)| {
                let d = (i64::from(target) - i64::from(c)).unsigned_abs();
                d * d
            })
            .sum();

        if dist < best_dist {
            best_index = index;
            best_dist = dist;
        }
    }

    best_index
}
