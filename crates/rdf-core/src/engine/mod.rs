mod histogram;
mod normalize;
mod sampler;

pub use histogram::bin_distances;
pub use normalize::{normalize_counts, shell_volume};
pub use sampler::pair_distances;

use crate::domain::{PointSet, RdfError, RdfResult};
use std::time::Instant;
use tracing::info;

/// The final artifact: one `(bin_center, value)` row per shell, in
/// increasing bin order.
#[derive(Debug, Clone, PartialEq)]
pub struct RdfCurve {
    rows: Vec<(f64, f64)>,
}

impl RdfCurve {
    pub fn rows(&self) -> &[(f64, f64)] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Owns the (cutoff, bin width) configuration and sequences the pipeline
/// sampler -> histogram -> normalizer for one frame at a time.
///
/// Stateless between invocations: repeated `construct` calls share nothing
/// but the fixed configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RdfEngine {
    cutoff: f64,
    bin_width: f64,
    nr_bins: usize,
}

impl RdfEngine {
    /// Rejects non-positive or non-finite configuration before any
    /// computation. `nr_bins = 0` (cutoff smaller than the bin width) is
    /// accepted and produces an empty curve.
    pub fn new(cutoff: f64, bin_width: f64) -> RdfResult<Self> {
        if !cutoff.is_finite() || cutoff <= 0.0 {
            return Err(RdfError::invalid_config(format!(
                "cutoff must be a positive finite number, got {}",
                cutoff
            )));
        }
        if !bin_width.is_finite() || bin_width <= 0.0 {
            return Err(RdfError::invalid_config(format!(
                "bin width must be a positive finite number, got {}",
                bin_width
            )));
        }

        Ok(Self {
            cutoff,
            bin_width,
            nr_bins: (cutoff / bin_width) as usize,
        })
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    pub fn nr_bins(&self) -> usize {
        self.nr_bins
    }

    /// Raw shell counts for one frame, before volume normalization.
    pub fn histogram(&self, frame: &PointSet) -> Vec<u64> {
        let start = Instant::now();
        let distances = pair_distances(frame);
        info!(
            points = frame.len(),
            pairs = distances.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "sampled pairwise distances"
        );

        bin_distances(&distances, self.cutoff, self.bin_width, self.nr_bins)
    }

    /// Builds the shell-volume-normalized RDF curve for one frame.
    pub fn construct(&self, frame: &PointSet) -> RdfCurve {
        info!(
            points = frame.len(),
            bins = self.nr_bins,
            cutoff = self.cutoff,
            bin_width = self.bin_width,
            "constructing RDF"
        );

        let counts = self.histogram(frame);
        let values = normalize_counts(&counts, self.bin_width);

        let rows = values
            .into_iter()
            .enumerate()
            .map(|(bin, value)| ((bin as f64 + 0.5) * self.bin_width, value))
            .collect();
        RdfCurve { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::RdfEngine;
    use crate::domain::{Point3, PointSet, RdfError};

    fn collinear_frame() -> PointSet {
        (0..4).map(|i| Point3::new(i as f64, 0.0, 0.0)).collect()
    }

    #[test]
    fn construction_rejects_bad_configuration() {
        for (cutoff, bin_width) in [
            (0.0, 0.5),
            (-1.0, 0.5),
            (f64::NAN, 0.5),
            (2.0, 0.0),
            (2.0, -0.5),
            (2.0, f64::INFINITY),
        ] {
            let error = RdfEngine::new(cutoff, bin_width)
                .expect_err("non-positive or non-finite configuration should be rejected");
            assert!(matches!(error, RdfError::InvalidConfig(_)));
        }
    }

    #[test]
    fn bin_count_is_derived_once_from_configuration() {
        let engine = RdfEngine::new(15.0, 0.05).expect("reference configuration is valid");
        assert_eq!(engine.nr_bins(), 300);

        let engine = RdfEngine::new(2.0, 0.5).expect("valid configuration");
        assert_eq!(engine.nr_bins(), 4);
    }

    #[test]
    fn zero_bins_is_a_legal_degenerate_engine() {
        let engine = RdfEngine::new(0.3, 0.5).expect("valid but degenerate configuration");
        assert_eq!(engine.nr_bins(), 0);

        let curve = engine.construct(&collinear_frame());
        assert!(curve.is_empty());
    }

    #[test]
    fn unit_pair_scenario_fills_only_bin_two() {
        let engine = RdfEngine::new(2.0, 0.5).expect("valid configuration");
        let frame = PointSet::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        ]);

        let counts = engine.histogram(&frame);
        assert_eq!(counts, vec![0, 0, 1, 0]);

        let curve = engine.construct(&frame);
        for (bin, (center, value)) in curve.rows().iter().enumerate() {
            assert!((center - (bin as f64 + 0.5) * 0.5).abs() < 1.0e-12);
            if bin == 2 {
                assert!(*value > 0.0 && value.is_finite());
            } else {
                assert_eq!(*value, 0.0);
            }
        }
    }

    #[test]
    fn collinear_scenario_matches_hand_derived_counts() {
        let engine = RdfEngine::new(4.0, 1.0).expect("valid configuration");
        let counts = engine.histogram(&collinear_frame());
        assert_eq!(counts, vec![0, 3, 2, 1]);
    }

    #[test]
    fn empty_and_single_point_frames_produce_zero_curves() {
        let engine = RdfEngine::new(2.0, 0.5).expect("valid configuration");

        for frame in [
            PointSet::default(),
            PointSet::new(vec![Point3::new(1.0, 1.0, 1.0)]),
        ] {
            assert_eq!(engine.histogram(&frame), vec![0, 0, 0, 0]);
            let curve = engine.construct(&frame);
            assert_eq!(curve.len(), 4);
            assert!(curve.rows().iter().all(|(_, value)| *value == 0.0));
        }
    }

    #[test]
    fn histogram_conserves_kept_plus_discarded() {
        let engine = RdfEngine::new(1.5, 0.25).expect("valid configuration");
        let frame = collinear_frame();

        let distances = super::pair_distances(&frame);
        let counts = engine.histogram(&frame);
        let kept: u64 = counts.iter().sum();
        let discarded = distances.iter().filter(|d| **d > 1.5).count() as u64;
        assert_eq!(kept + discarded, distances.len() as u64);
    }

    #[test]
    fn engine_is_stateless_across_invocations() {
        let engine = RdfEngine::new(4.0, 1.0).expect("valid configuration");
        let first = engine.construct(&collinear_frame());
        engine.construct(&PointSet::default());
        let second = engine.construct(&collinear_frame());
        assert_eq!(first, second);
    }
}
