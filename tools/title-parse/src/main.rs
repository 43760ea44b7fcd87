//! Title Parse Tool
//!
//! Reads video titles line by line and prints one JSON credit record per
//! line, for batch jobs that persist the parsed fields elsewhere.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tunecredit_core::{CreditParser, ParsedCredit, ParserConfig, TrackCredit};

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "tunecredit-parse")]
#[command(about = "Parse artist, feature and version credits from video titles")]
#[command(version)]
struct Cli {
    /// Read titles from this file instead of stdin
    #[arg(short, long, env = "TUNECREDIT_INPUT")]
    input: Option<PathBuf>,

    /// Also drop quality labels, years and other YouTube descriptors
    #[arg(short, long, env = "TUNECREDIT_NORMALIZE_NOISE")]
    normalize_noise: bool,

    /// Split "Artist A & Artist B - " prefixes before parsing
    #[arg(short, long, env = "TUNECREDIT_SPLIT_ARTISTS")]
    split_artists: bool,

    /// Recognize unbracketed credits such as "Song ft. Guest"
    #[arg(short, long, env = "TUNECREDIT_BARE_FEATURES")]
    bare_features: bool,

    /// Recognize collaboration credits such as "Song (with Guest)"
    #[arg(short, long, env = "TUNECREDIT_COLLAB_CLAUSES")]
    collab_clauses: bool,

    /// Pretty-print each record
    #[arg(long)]
    pretty: bool,
}

/// Parsed fields for one title, tagged with its input line.
#[derive(Debug, Serialize)]
struct Record<'a> {
    input: &'a str,
    #[serde(flatten)]
    credit: Credit,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Credit {
    Title(ParsedCredit),
    Track(TrackCredit),
}

fn render<'a>(parser: &CreditParser, line: &'a str, split_artists: bool) -> Record<'a> {
    let credit = if split_artists {
        Credit::Track(parser.parse_track(line))
    } else {
        Credit::Title(parser.parse(line))
    };
    Record {
        input: line,
        credit,
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "starting");

    let config = ParserConfig::new()
        .with_youtube_noise(cli.normalize_noise)
        .with_bare_features(cli.bare_features)
        .with_collab_clauses(cli.collab_clauses);
    let parser = CreditParser::with_config(config).context("Failed to build title parser")?;

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let mut out = io::stdout().lock();
    let mut parsed = 0usize;

    for line in reader.lines() {
        let line = line.context("Failed to read title")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let record = render(&parser, line, cli.split_artists);
        let json = if cli.pretty {
            serde_json::to_string_pretty(&record)
        } else {
            serde_json::to_string(&record)
        }
        .context("Failed to serialize record")?;

        writeln!(out, "{json}").context("Failed to write record")?;
        parsed += 1;
    }

    info!(parsed, "finished parsing titles");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> CreditParser {
        CreditParser::new().unwrap()
    }

    #[test]
    fn title_record_json() {
        let p = parser();
        let record = render(&p, "Dance Track (Remix)", false);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "input": "Dance Track (Remix)",
                "artist": "",
                "title": "Dance Track",
                "features": [],
                "version": "Remix",
            })
        );
    }

    #[test]
    fn track_record_json() {
        let p = parser();
        let record = render(&p, "Lute & JID - Luther's Freestyle (feat. EarthGang)", true);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["artists"], serde_json::json!(["Lute", "JID"]));
        assert_eq!(json["title"], "Luther's Freestyle");
        assert_eq!(json["features"], serde_json::json!(["EarthGang"]));
        assert_eq!(json["version"], "Original");
    }

    #[test]
    fn bare_features_follow_config() {
        let p = CreditParser::with_config(ParserConfig::new().with_bare_features(true)).unwrap();
        let record = render(&p, "Song ft. Guest", false);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["title"], "Song");
        assert_eq!(json["features"], serde_json::json!(["Guest"]));
    }

    #[test]
    fn collab_clauses_follow_config() {
        let config = ParserConfig::new().with_collab_clauses(true);
        let p = CreditParser::with_config(config).unwrap();
        let record = render(&p, "Band - Song (with Guest)", true);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["artists"], serde_json::json!(["Band"]));
        assert_eq!(json["title"], "Song");
        assert_eq!(json["features"], serde_json::json!(["Guest"]));
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::try_parse_from(["tunecredit-parse", "--normalize-noise", "-s", "--pretty"])
            .unwrap();
        assert!(cli.normalize_noise);
        assert!(cli.split_artists);
        assert!(cli.pretty);
        assert!(!cli.bare_features);
        assert!(!cli.collab_clauses);
        assert!(cli.input.is_none());
    }
}
