use crate::domain::{Point3, PointSet, RdfError, RdfResult, Trajectory};
use std::fs;
use std::path::Path;
use tracing::info;

/// Reads a trajectory file into an ordered collection of frames.
///
/// Each frame block is: an atom-count line, a comment line (discarded), and
/// that many data lines of whitespace-separated numeric tokens with x, y, z
/// at token positions 1, 2, 3 (token 0 is the atom id/type and is ignored).
pub fn read_trajectory_file(path: &Path) -> RdfResult<Trajectory> {
    let source = fs::read_to_string(path).map_err(|source| RdfError::io(path, source))?;
    parse_trajectory(&source)
}

/// Parses trajectory source text. Any malformed line fails the whole parse
/// with a line-numbered error; lines are never silently skipped.
pub fn parse_trajectory(source: &str) -> RdfResult<Trajectory> {
    let mut trajectory = Trajectory::new();
    let mut lines = source.lines().enumerate();

    while let Some((index, line)) = lines.next() {
        if line.trim().is_empty() {
            continue;
        }

        let atom_count = parse_atom_count(index + 1, line)?;
        info!(
            atoms = atom_count,
            frame = trajectory.len() + 1,
            "reading frame"
        );

        // Comment line, discarded. Its absence means a truncated block.
        let (comment_index, _) = lines.next().ok_or_else(|| {
            RdfError::malformed_input(
                index + 1,
                format!("frame declares {} atoms but the file ends", atom_count),
            )
        })?;

        // Cap the preallocation so a hostile declared count cannot abort
        // on allocation before the truncated-block error fires.
        let mut points = Vec::with_capacity(atom_count.min(1 << 20));
        for _ in 0..atom_count {
            let (data_index, data_line) = lines.next().ok_or_else(|| {
                RdfError::malformed_input(
                    comment_index + 1,
                    format!(
                        "frame declares {} atoms but only {} data line(s) follow",
                        atom_count,
                        points.len()
                    ),
                )
            })?;
            points.push(parse_data_line(data_index + 1, data_line)?);
        }

        trajectory.push(PointSet::new(points));
    }

    Ok(trajectory)
}

fn parse_atom_count(line_number: usize, line: &str) -> RdfResult<usize> {
    line.trim().parse::<usize>().map_err(|_| {
        RdfError::malformed_input(
            line_number,
            format!("expected a decimal atom count, got '{}'", line.trim()),
        )
    })
}

fn parse_data_line(line_number: usize, line: &str) -> RdfResult<Point3> {
    let mut coordinates = [0.0_f64; 3];
    let mut parsed = 0;

    for (position, token) in line.split_whitespace().enumerate() {
        let value = token.parse::<f64>().map_err(|_| {
            RdfError::malformed_input(
                line_number,
                format!("expected a numeric token at position {}, got '{}'", position, token),
            )
        })?;
        if (1..=3).contains(&position) {
            coordinates[position - 1] = value;
        }
        parsed += 1;
        if parsed == 4 {
            break;
        }
    }

    if parsed < 4 {
        return Err(RdfError::malformed_input(
            line_number,
            format!("expected at least 4 numeric tokens, found {}", parsed),
        ));
    }

    Ok(Point3::new(coordinates[0], coordinates[1], coordinates[2]))
}
