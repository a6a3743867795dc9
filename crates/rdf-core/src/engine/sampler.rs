use crate::domain::PointSet;
use rayon::prelude::*;

/// Computes the multiset of Euclidean distances between every unordered
/// pair of distinct points, exactly N * (N - 1) / 2 values.
///
/// The outer index space is split across the rayon pool; each worker fills
/// a private buffer which is merged by append at reduction time, so no two
/// workers ever write to the same buffer. Work stealing absorbs the
/// triangular-loop imbalance (the inner range shrinks as i grows).
/// Emission order is unspecified; consumers treat the result as unordered.
pub fn pair_distances(frame: &PointSet) -> Vec<f64> {
    let points = frame.points();
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    (0..n - 1)
        .into_par_iter()
        .fold(Vec::new, |mut buffer, i| {
            let origin = points[i];
            for other in &points[i + 1..] {
                buffer.push(origin.distance_to(other));
            }
            buffer
        })
        .reduce(Vec::new, |mut merged, mut buffer| {
            merged.append(&mut buffer);
            merged
        })
}
