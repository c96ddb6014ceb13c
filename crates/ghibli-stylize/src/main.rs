//! ghibli-stylize: apply the reference restyle outside the browser.
//!
//! Takes either an image file or a transform request JSON (the body the
//! web app POSTs to `/api/transform`) and writes the restyled JPEG or
//! the matching response JSON.
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin ghibli-stylize -- photo.png -o photo-ghibli.jpg
//! cargo run --release --bin ghibli-stylize -- --request req.json -o resp.json
//! ```
//!
//! Set `RUST_LOG=debug` for per-step logging.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use ghibli_core::TransformRequest;
use ghibli_style::{StyleConfig, StyleError};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Apply the Ghibli reference restyle to an image or a transform request.
#[derive(Parser)]
#[command(name = "ghibli-stylize", version)]
struct Cli {
    /// Input image (PNG or JPEG), or request JSON with `--request`.
    input: PathBuf,

    /// Output JPEG, or response JSON with `--request`.
    #[arg(short, long)]
    output: PathBuf,

    /// Lightness lift on the 8-bit L*a*b* scale.
    #[arg(long, default_value_t = StyleConfig::DEFAULT_BRIGHTNESS)]
    brightness: u8,

    /// Gaussian blur sigma (0 disables the blur).
    #[arg(long, default_value_t = StyleConfig::DEFAULT_BLUR_SIGMA)]
    blur_sigma: f32,

    /// JPEG quality (1-100).
    #[arg(long, default_value_t = StyleConfig::DEFAULT_JPEG_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Treat INPUT and OUTPUT as transform request/response JSON.
    #[arg(long)]
    request: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid transform request: {0}")]
    Request(#[source] serde_json::Error),

    #[error("failed to serialize response: {0}")]
    Response(#[source] serde_json::Error),

    #[error(transparent)]
    Style(#[from] StyleError),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = StyleConfig {
        brightness: cli.brightness,
        blur_sigma: cli.blur_sigma,
        jpeg_quality: cli.quality,
    };
    debug!(?config, "style config");

    let result = if cli.request {
        run_request(&cli.input, &cli.output, &config)
    } else {
        run_image(&cli.input, &cli.output, &config)
    };

    match result {
        Ok(written) => {
            info!("wrote {} bytes to {}", written, cli.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run_image(input: &Path, output: &Path, config: &StyleConfig) -> Result<usize, CliError> {
    let bytes = read(input)?;
    debug!("read {} bytes from {}", bytes.len(), input.display());
    let jpeg = ghibli_style::stylize(&bytes, config)?;
    write(output, &jpeg)?;
    Ok(jpeg.len())
}

fn run_request(input: &Path, output: &Path, config: &StyleConfig) -> Result<usize, CliError> {
    let body = read(input)?;
    let request: TransformRequest = serde_json::from_slice(&body).map_err(CliError::Request)?;
    let response = ghibli_style::handle_request(&request, config)?;
    let json = serde_json::to_vec_pretty(&response).map_err(CliError::Response)?;
    write(output, &json)?;
    Ok(json.len())
}

fn read(path: &Path) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write(path: &Path, contents: &[u8]) -> Result<(), CliError> {
    std::fs::write(path, contents).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}
