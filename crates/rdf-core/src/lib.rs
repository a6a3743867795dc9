pub mod domain;
pub mod engine;
pub mod output;
pub mod parser;

pub use domain::{Point3, PointSet, RdfError, RdfResult, Trajectory};
pub use engine::{RdfCurve, RdfEngine};
