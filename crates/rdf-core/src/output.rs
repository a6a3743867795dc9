use crate::domain::{RdfError, RdfResult};
use crate::engine::RdfCurve;
use std::fs;
use std::path::Path;
use tracing::info;

/// Renders one `<bin_center>\t<value>` line per bin, in increasing bin
/// order.
pub fn render_curve(curve: &RdfCurve) -> String {
    let mut rendered = String::new();
    for (center, value) in curve.rows() {
        rendered.push_str(&format!("{}\t{}\n", center, value));
    }
    rendered
}

pub fn normalize_text_artifact(content: &str) -> String {
    let mut normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    if !normalized.is_empty() && !normalized.ends_with('\n') {
        normalized.push('\n');
    }
    normalized
}

pub fn write_curve(path: &Path, curve: &RdfCurve) -> RdfResult<()> {
    info!(path = %path.display(), bins = curve.len(), "writing RDF curve");
    fs::write(path, normalize_text_artifact(&render_curve(curve)))
        .map_err(|source| RdfError::io(path, source))
}

#[cfg(test)]
mod tests {
    use super::{normalize_text_artifact, render_curve, write_curve};
    use crate::domain::{Point3, PointSet, RdfError};
    use crate::engine::RdfEngine;
    use std::fs;
    use tempfile::TempDir;

    fn unit_pair_curve() -> crate::engine::RdfCurve {
        let engine = RdfEngine::new(2.0, 0.5).expect("valid configuration");
        let frame = PointSet::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        ]);
        engine.construct(&frame)
    }

    #[test]
    fn rendered_rows_are_tab_separated_in_bin_order() {
        let rendered = render_curve(&unit_pair_curve());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("0.25\t"));
        assert!(lines[1].starts_with("0.75\t"));
        assert!(lines[2].starts_with("1.25\t"));
        assert!(lines[3].starts_with("1.75\t"));
        assert!(lines[0].ends_with("\t0"));
    }

    #[test]
    fn normalize_text_artifact_uses_canonical_line_endings() {
        assert_eq!(
            normalize_text_artifact("alpha\r\nbeta\rgamma"),
            "alpha\nbeta\ngamma\n"
        );
        assert_eq!(normalize_text_artifact(""), "");
    }

    #[test]
    fn repeated_curve_writes_produce_identical_bytes() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("rdf.dat");
        let curve = unit_pair_curve();

        write_curve(&path, &curve).expect("first write should succeed");
        let first = fs::read(&path).expect("artifact should be readable");
        write_curve(&path, &curve).expect("second write should succeed");
        let second = fs::read(&path).expect("artifact should be readable");

        assert_eq!(first, second);
        assert_eq!(first.iter().filter(|byte| **byte == b'\n').count(), 4);
    }

    #[test]
    fn unwritable_destination_surfaces_io_error() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("missing-dir").join("rdf.dat");
        let error = write_curve(&path, &unit_pair_curve()).expect_err("write should fail");
        assert!(matches!(error, RdfError::Io { .. }));
    }
}
