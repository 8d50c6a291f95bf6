//! lesstof command-line interface.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lesstof::{IngestPolicy, SegmentBounds, Segmenter, TextSegmenter};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lesstof")]
#[command(about = "Clean and segment extracted course material", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cleaned text
    Clean {
        /// Input text file, or `-` for stdin
        file: PathBuf,
    },
    /// Print the segments of the cleaned text
    Segment {
        /// Input text file, or `-` for stdin
        file: PathBuf,
        /// Lower segment bound in characters
        #[arg(long, default_value_t = SegmentBounds::DEFAULT_MIN_LEN)]
        min_len: usize,
        /// Upper segment bound in characters
        #[arg(long, default_value_t = SegmentBounds::DEFAULT_MAX_LEN)]
        max_len: usize,
    },
    /// Print storage-ready segment records as JSON
    Ingest {
        /// Input text file, or `-` for stdin
        file: PathBuf,
        /// Identifier of the material the segments belong to
        #[arg(long)]
        material_id: String,
        /// TOML ingest policy
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli, &mut std::io::stdin().lock(), &mut std::io::stdout().lock())
}

fn run(cli: Cli, stdin: &mut dyn Read, out: &mut dyn Write) -> Result<()> {
    match cli.command {
        Commands::Clean { file } => {
            let raw = read_input(&file, stdin)?;
            writeln!(out, "{}", lesstof::clean(&raw))?;
        }
        Commands::Segment {
            file,
            min_len,
            max_len,
        } => {
            let bounds = SegmentBounds::new(min_len, max_len)?;
            let raw = read_input(&file, stdin)?;
            let text = lesstof::clean(&raw);
            for segment in TextSegmenter::new(bounds).segment(&text) {
                writeln!(out, "--- segment {} ({} chars) ---", segment.index, segment.len())?;
                writeln!(out, "{}", segment.text)?;
            }
        }
        Commands::Ingest {
            file,
            material_id,
            config,
        } => {
            let policy = match config {
                Some(path) => load_policy(&path)?,
                None => IngestPolicy::default(),
            };
            let raw = read_input(&file, stdin)?;
            let ingested = lesstof::ingest(&material_id, &raw, &policy)
                .with_context(|| format!("ingesting {}", file.display()))?;
            writeln!(out, "{}", serde_json::to_string_pretty(&ingested)?)?;
        }
    }

    Ok(())
}

/// Read `path`, or all of `stdin` when the path is `-`.
fn read_input(path: &Path, stdin: &mut dyn Read) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        stdin.read_to_string(&mut buf).context("reading stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn load_policy(path: &Path) -> Result<IngestPolicy> {
    let source =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    IngestPolicy::from_toml_str(&source).with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_args(args: &[&str], stdin: &str) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        run(cli, &mut Cursor::new(stdin.as_bytes()), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_clean_from_stdin() {
        let out = run_args(&["lesstof", "clean", "-"], "\tHallo\t\twereld\r\n\n\n").unwrap();
        assert_eq!(out, "Hallo wereld\n");
    }

    #[test]
    fn test_segment_with_bounds() {
        let text = "Eerste alinea hier.\n\nTweede alinea hier.\n\nDerde.";
        let out = run_args(
            &["lesstof", "segment", "-", "--min-len", "10", "--max-len", "40"],
            text,
        )
        .unwrap();
        assert_eq!(
            out,
            "--- segment 0 (40 chars) ---\nEerste alinea hier.\n\nTweede alinea hier.\n\
             --- segment 1 (6 chars) ---\nDerde.\n"
        );
    }

    #[test]
    fn test_segment_rejects_inverted_bounds() {
        let err = run_args(
            &["lesstof", "segment", "-", "--min-len", "900", "--max-len", "300"],
            "tekst",
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<lesstof::Error>(),
            Some(lesstof::Error::InvalidBounds { min_len: 900, max_len: 300 })
        ));
    }

    #[test]
    fn test_segment_defaults() {
        let cli = Cli::try_parse_from(["lesstof", "segment", "notes.txt"]).unwrap();
        match cli.command {
            Commands::Segment {
                file,
                min_len,
                max_len,
            } => {
                assert_eq!(file, PathBuf::from("notes.txt"));
                assert_eq!(min_len, SegmentBounds::DEFAULT_MIN_LEN);
                assert_eq!(max_len, SegmentBounds::DEFAULT_MAX_LEN);
            }
            _ => panic!("expected segment subcommand"),
        }
    }

    #[test]
    fn test_ingest_requires_material_id() {
        assert!(Cli::try_parse_from(["lesstof", "ingest", "-"]).is_err());
    }

    #[test]
    fn test_ingest_file_with_config() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("h1.txt");
        let config = dir.path().join("policy.toml");
        std::fs::write(&input, "De cel is de kleinste eenheid van leven.").unwrap();
        std::fs::write(&config, "min_text_len = 5\n[bounds]\nmin_len = 10\nmax_len = 100\n")
            .unwrap();

        let out = run_args(
            &[
                "lesstof",
                "ingest",
                input.to_str().unwrap(),
                "--material-id",
                "bio-h1",
                "--config",
                config.to_str().unwrap(),
            ],
            "",
        )
        .unwrap();

        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["materialId"], "bio-h1");
        assert_eq!(json["segments"].as_array().unwrap().len(), 1);
        assert_eq!(json["segments"][0]["length"], 40);
    }

    #[test]
    fn test_ingest_rejects_short_stdin() {
        let err = run_args(&["lesstof", "ingest", "-", "--material-id", "m"], "kort").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<lesstof::Error>(),
            Some(lesstof::Error::TextTooShort { len: 4, .. })
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = run_args(&["lesstof", "clean", "/nonexistent/lesstof.txt"], "").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/lesstof.txt"));
    }
}
