use std::f64::consts::PI;

/// Analytic volume of the spherical shell used to normalize bin `i`.
///
/// Radii follow the reference formula: inner `(i - 1) * w`, outer `i * w`.
/// At i = 0 the inner radius is -w, so the first shell's volume is
/// `4/3 * pi * w^3` rather than zero. Kept deliberately: clamping the inner
/// radius to zero would pair it with the zero outer radius and make every
/// populated first bin divide by zero.
pub fn shell_volume(bin: usize, bin_width: f64) -> f64 {
    let r1 = (bin as f64 - 1.0) * bin_width;
    let r2 = bin as f64 * bin_width;
    4.0 / 3.0 * PI * (r2.powi(3) - r1.powi(3))
}

/// Converts raw shell counts into density-like RDF values, correcting for
/// the growth of shell volume with radius.
pub fn normalize_counts(counts: &[u64], bin_width: f64) -> Vec<f64> {
    counts
        .iter()
        .enumerate()
        .map(|(bin, count)| *count as f64 / shell_volume(bin, bin_width))
        .collect()
}
