use rayon::prelude::*;

/// Bins a distance slice into `nr_bins` shells of width `bin_width`.
///
/// Distances strictly greater than `cutoff` are discarded; a distance
/// exactly at the cutoff is kept. Floating-point rounding can push the bin
/// index of a distance extremely close to the cutoff to `nr_bins`; that
/// index is clamped into the last bin so the conservation invariant
/// `sum(counts) + discarded == distances.len()` holds exactly.
///
/// Each worker accumulates into a private count array; arrays are merged by
/// element-wise addition at reduction time. Counts are integers, so the
/// result is identical for any worker count.
pub fn bin_distances(distances: &[f64], cutoff: f64, bin_width: f64, nr_bins: usize) -> Vec<u64> {
    if nr_bins == 0 {
        return Vec::new();
    }

    distances
        .par_iter()
        .fold(
            || vec![0_u64; nr_bins],
            |mut counts, distance| {
                if *distance <= cutoff {
                    let bin = ((distance / bin_width) as usize).min(nr_bins - 1);
                    counts[bin] += 1;
                }
                counts
            },
        )
        .reduce(
            || vec![0_u64; nr_bins],
            |mut merged, counts| {
                for (total, count) in merged.iter_mut().zip(counts) {
                    *total += count;
                }
                merged
            },
        )
}
