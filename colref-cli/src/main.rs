//! colref command line
//!
//! Validates the column references of a configuration document and prints
//! the resolved runtime types of every consumer's inputs.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use indexmap::IndexMap;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

use colref::config::{load_file, validate_document};
use colref::{ConfigError, ResolvedTypes};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration document (YAML or JSON)
    path: PathBuf,

    /// Output format for the resolved types
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Log filter, e.g. `colref=debug`. Falls back to RUST_LOG.
    #[arg(long, env = "COLREF_LOG")]
    log_level: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let status = execute(&cli, &mut io::stdout().lock(), &mut io::stderr().lock());
    ExitCode::from(status)
}

/// Run the command, returning the process exit status
fn execute(cli: &Cli, out: &mut impl Write, err: &mut impl Write) -> u8 {
    match run(cli, out) {
        Ok(()) => 0,
        Err(e) => {
            if let Err(io_err) = report(&e, err) {
                debug!(error = %io_err, "failed to write error report");
            }
            1
        }
    }
}

fn init_logging(filter: Option<&str>) {
    let env_filter = match filter {
        Some(directives) => tracing_subscriber::EnvFilter::new(directives),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("colref=warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    info!(path = %cli.path.display(), "validating column references");

    let document = load_file(&cli.path)?;
    let validated = validate_document(&document)?;

    let output: &IndexMap<String, ResolvedTypes> = &validated.consumers;
    let rendered = match cli.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(output).context("failed to render JSON output")?
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(output).context("failed to render YAML output")?
        }
    };
    writeln!(out, "{}", rendered.trim_end()).context("failed to write output")?;
    Ok(())
}

/// One line per failing consumer, or the single top-level error
fn report(err: &anyhow::Error, out: &mut impl Write) -> io::Result<()> {
    match err.downcast_ref::<ConfigError>() {
        Some(ConfigError::Resolution(errors)) => {
            debug!(count = errors.len(), "column reference validation failed");
            for e in errors {
                writeln!(out, "error: {}", e)?;
            }
            Ok(())
        }
        _ => writeln!(out, "error: {:#}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_json_output() {
        let cli = Cli::try_parse_from(["colref", "pipeline.yaml"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("pipeline.yaml"));
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn accepts_yaml_format() {
        let cli = Cli::try_parse_from(["colref", "--format", "yaml", "p.yaml"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Yaml));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["colref", "--format", "toml", "p.yaml"]).is_err());
    }

    fn document(source: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(source.as_bytes()).unwrap();
        file
    }

    fn execute_captured(cli: &Cli) -> (u8, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let status = execute(cli, &mut out, &mut err);
        (
            status,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    const COLUMNS: &str = r#"
columns:
  - name: rfInt
    type: INT_COLUMN
  - name: rfStr
    type: STRING_COLUMN
"#;

    #[test]
    fn prints_resolved_types_per_consumer() {
        let file = document(&format!(
            "{}{}",
            COLUMNS,
            r#"
consumers:
  - name: bucketize
    inputs:
      in1: [rfInt, rfStr, rfInt]
      in2: rfStr
"#
        ));
        let cli = Cli {
            path: file.path().to_path_buf(),
            format: OutputFormat::Json,
            log_level: None,
        };

        let (status, out, err) = execute_captured(&cli);
        assert_eq!(status, 0, "stderr: {}", err);
        assert!(err.is_empty());

        let printed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            printed,
            serde_json::json!({
                "bucketize": {
                    "in1": ["INT_COLUMN", "STRING_COLUMN", "INT_COLUMN"],
                    "in2": "STRING_COLUMN"
                }
            })
        );
    }

    #[test]
    fn prints_yaml_when_asked() {
        let file = document(&format!(
            "{}{}",
            COLUMNS, "consumers:\n  - name: c\n    inputs:\n      in: rfInt\n"
        ));
        let cli = Cli {
            path: file.path().to_path_buf(),
            format: OutputFormat::Yaml,
            log_level: None,
        };

        let (status, out, _) = execute_captured(&cli);
        assert_eq!(status, 0);
        let printed: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(printed["c"]["in"], serde_yaml::Value::from("INT_COLUMN"));
    }

    #[test]
    fn reports_every_failing_consumer_and_exits_with_one() {
        let file = document(&format!(
            "{}{}",
            COLUMNS,
            r#"
consumers:
  - name: first
    inputs:
      in: rfMissing
  - name: fine
    inputs:
      in: rfInt
  - name: second
    inputs:
      in: [rfStr, 3]
"#
        ));
        let cli = Cli {
            path: file.path().to_path_buf(),
            format: OutputFormat::Json,
            log_level: None,
        };

        let (status, out, err) = execute_captured(&cli);
        assert_eq!(status, 1);
        assert!(out.is_empty());

        let lines: Vec<&str> = err.lines().collect();
        assert_eq!(lines.len(), 2, "stderr: {}", err);
        assert_eq!(
            lines[0],
            "error: first: column input 'in' references undefined column 'rfMissing'"
        );
        assert!(lines[1].starts_with("error: second: column input 'in' has invalid value"));
        assert!(lines[1].ends_with("found list with number at position 1"));
    }

    #[test]
    fn missing_document_is_a_single_error() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            path: dir.path().join("absent.yaml"),
            format: OutputFormat::Json,
            log_level: None,
        };

        let (status, out, err) = execute_captured(&cli);
        assert_eq!(status, 1);
        assert!(out.is_empty());
        assert_eq!(err.lines().count(), 1);
        assert!(err.starts_with("error: failed to read"));
    }
}
