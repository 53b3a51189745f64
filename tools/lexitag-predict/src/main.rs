//! Lexitag prediction tool
//!
//! Loads a trained tagger and prints the predicted tag for each token of a
//! sentence (or of each line read from stdin).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lexitag_core::{Prediction, Predictor, PredictorPaths};
use tracing::{debug, Level};

/// CLI arguments
#[derive(Debug, Parser)]
#[command(name = "lexitag-predict")]
#[command(about = "Tag sentences with a pretrained named-entity model")]
#[command(version)]
struct Cli {
    /// Directory containing the dataset
    #[arg(long = "data_dir", alias = "data-dir", default_value = "data/small")]
    data_dir: PathBuf,

    /// Directory containing params.json
    #[arg(long = "model_dir", alias = "model-dir", default_value = "experiments/base_model")]
    model_dir: PathBuf,

    /// Name of the file in --model_dir containing weights to load
    #[arg(long = "restore_file", alias = "restore-file", default_value = "best")]
    restore_file: String,

    /// Sentence to tag
    #[arg(short, long, default_value = "breaking news", conflicts_with = "stdin")]
    sentence: String,

    /// Read one sentence per line from stdin instead
    #[arg(long)]
    stdin: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Indices)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Tag indices, e.g. `[3, 0]`
    Indices,
    /// Tag names separated by spaces; indices missing from tags.txt print as numbers
    Tags,
    /// One JSON object per sentence
    Json,
}

impl Cli {
    fn paths(&self) -> PredictorPaths {
        PredictorPaths::new(&self.data_dir, &self.model_dir, &self.restore_file)
    }
}

fn render(prediction: &Prediction, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Indices => format!("{:?}", prediction.tag_indices),
        OutputFormat::Tags => prediction
            .tags
            .iter()
            .zip(&prediction.tag_indices)
            .map(|(tag, index)| tag.clone().unwrap_or_else(|| index.to_string()))
            .collect::<Vec<_>>()
            .join(" "),
        OutputFormat::Json => serde_json::to_string(prediction)?,
    })
}

fn run(cli: &Cli) -> Result<()> {
    let paths = cli.paths();
    let predictor = Predictor::load(&paths).with_context(|| {
        format!(
            "Failed to load model from {:?} with data from {:?}",
            paths.model_dir, paths.data_dir
        )
    })?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.stdin {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read stdin")?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let prediction = predictor
                .predict(line)
                .with_context(|| format!("Failed to tag {line:?}"))?;
            writeln!(out, "{}", render(&prediction, cli.format)?)?;
        }
    } else {
        let prediction = predictor
            .predict(&cli.sentence)
            .with_context(|| format!("Failed to tag {:?}", cli.sentence))?;
        debug!(tokens = ?prediction.tokens, "tagged sentence");
        writeln!(out, "{}", render(&prediction, cli.format)?)?;
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction() -> Prediction {
        Prediction {
            sentence: "Breaking news".to_string(),
            tokens: vec!["breaking".to_string(), "news".to_string()],
            tag_indices: vec![3, 0],
            tags: vec![Some("B-ORG".to_string()), Some("O".to_string())],
        }
    }

    #[test]
    fn test_default_args() {
        let cli = Cli::try_parse_from(["lexitag-predict"]).unwrap();
        assert_eq!(cli.data_dir, PathBuf::from("data/small"));
        assert_eq!(cli.model_dir, PathBuf::from("experiments/base_model"));
        assert_eq!(cli.restore_file, "best");
        assert_eq!(cli.sentence, "breaking news");
        assert_eq!(cli.format, OutputFormat::Indices);
        assert!(!cli.stdin);
    }

    #[test]
    fn test_underscore_flags() {
        let cli = Cli::try_parse_from([
            "lexitag-predict",
            "--data_dir",
            "data/full",
            "--model_dir",
            "experiments/big",
            "--restore_file",
            "last",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, PathBuf::from("data/full"));
        assert_eq!(cli.paths().checkpoint_file(), PathBuf::from("experiments/big/last.pth.tar"));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_sentence_conflicts_with_stdin() {
        let result = Cli::try_parse_from(["lexitag-predict", "--stdin", "--sentence", "hi"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_render_formats() {
        let p = prediction();
        assert_eq!(render(&p, OutputFormat::Indices).unwrap(), "[3, 0]");
        assert_eq!(render(&p, OutputFormat::Tags).unwrap(), "B-ORG O");

        let json: serde_json::Value =
            serde_json::from_str(&render(&p, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["tag_indices"], serde_json::json!([3, 0]));
        assert_eq!(json["tokens"][1], "news");
    }

    #[test]
    fn test_render_unresolved_tags() {
        let mut p = prediction();
        p.tags[0] = None;

        assert_eq!(render(&p, OutputFormat::Indices).unwrap(), "[3, 0]");
        assert_eq!(render(&p, OutputFormat::Tags).unwrap(), "3 O");

        let json: serde_json::Value =
            serde_json::from_str(&render(&p, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["tags"], serde_json::json!([null, "O"]));
    }

    #[test]
    fn test_missing_dataset_params_fails() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("data");
        let model_dir = dir.path().join("model");
        std::fs::create_dir_all(&data_dir).unwrap();
        std::fs::create_dir_all(&model_dir).unwrap();
        std::fs::write(model_dir.join("params.json"), r#"{"embedding_dim": 4}"#).unwrap();

        let cli = Cli::try_parse_from([
            "lexitag-predict".into(),
            "--data_dir".into(),
            data_dir.clone().into_os_string(),
            "--model_dir".into(),
            model_dir.into_os_string(),
        ])
        .unwrap();

        let err = run(&cli).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("No json file found at"));
        assert!(message.contains("dataset_params.json"));
    }
}
