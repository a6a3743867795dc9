pub mod errors;

pub use errors::{RdfError, RdfResult};

/// A single particle position. No identity beyond its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance_to(&self, other: &Point3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// One frame of particle positions, immutable after construction.
///
/// Index order is preserved from the input file; pairs are unordered
/// `{i, j}` with `i != j`, each counted exactly once downstream.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointSet {
    points: Vec<Point3>,
}

impl PointSet {
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Number of unordered pairs of distinct points, N * (N - 1) / 2.
    pub fn pair_count(&self) -> usize {
        let n = self.points.len();
        n * n.saturating_sub(1) / 2
    }
}

impl FromIterator<Point3> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point3>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Append-only ordered collection of frames parsed from one input file.
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    frames: Vec<PointSet>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: PointSet) {
        self.frames.push(frame);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Selects a frame by zero-based index, or the most recently parsed
    /// frame when `selection` is `None`.
    pub fn frame(&self, selection: Option<usize>) -> RdfResult<&PointSet> {
        match selection {
            None => self.frames.last().ok_or(RdfError::FrameOutOfRange {
                requested: 0,
                available: 0,
            }),
            Some(index) => self.frames.get(index).ok_or(RdfError::FrameOutOfRange {
                requested: index,
                available: self.frames.len(),
            }),
        }
    }
}
