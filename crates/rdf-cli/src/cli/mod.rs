use clap::Parser;
use rdf_core::domain::RdfError;
use rdf_core::engine::RdfEngine;
use rdf_core::output::write_curve;
use rdf_core::parser::read_trajectory_file;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Cutoff and bin width the original tool compiled in; surfaced here as
/// flag defaults.
const DEFAULT_CUTOFF: f64 = 15.0;
const DEFAULT_BIN_WIDTH: f64 = 0.05;

pub fn run_from_env() -> i32 {
    init_tracing();

    match run(std::env::args().skip(1)) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {}", error);
            error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("rdf-rs".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();

    let cli = match Cli::try_parse_from(&full_args) {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                return Ok(0);
            }
            _ => return Err(CliError::Usage(err.to_string())),
        },
    };

    execute(cli)?;
    Ok(0)
}

#[derive(Parser)]
#[command(name = "rdf-rs", about = "Calculate a radial distribution function from a trajectory file", version)]
struct Cli {
    /// Input trajectory file (e.g. geom.dat)
    #[arg(short, long, value_name = "filename")]
    input: PathBuf,

    /// Output RDF curve file (e.g. rdf.dat)
    #[arg(short, long, value_name = "filename")]
    output: PathBuf,

    /// Maximum pair distance considered
    #[arg(long, default_value_t = DEFAULT_CUTOFF)]
    cutoff: f64,

    /// Histogram shell width
    #[arg(long, default_value_t = DEFAULT_BIN_WIDTH)]
    bin_width: f64,

    /// Zero-based frame index; defaults to the last frame in the file
    #[arg(long, value_name = "index")]
    frame: Option<usize>,
}

fn execute(cli: Cli) -> Result<(), CliError> {
    let engine = RdfEngine::new(cli.cutoff, cli.bin_width)?;

    let trajectory = read_trajectory_file(&cli.input)?;
    info!(
        frames = trajectory.len(),
        input = %cli.input.display(),
        "parsed trajectory"
    );

    let frame = trajectory.frame(cli.frame)?;
    let curve = engine.construct(frame);
    write_curve(&cli.output, &curve)?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Compute(#[from] RdfError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            Self::Compute(RdfError::MalformedInput { .. }) => 3,
            Self::Compute(RdfError::Io { .. }) => 4,
            Self::Compute(RdfError::InvalidConfig(_)) => 2,
            Self::Compute(RdfError::FrameOutOfRange { .. }) => 5,
            Self::Internal(_) => 6,
        }
    }
}
