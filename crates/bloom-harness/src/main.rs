//! # WordBloom
//!
//! Measures a Bloom filter's real false-positive rate on a word list.
//!
//! ```text
//! wordbloom 0.01 --words /usr/share/dict/words
//! WORDBLOOM_WORDS=words.txt wordbloom 0.05 --json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use bloom_harness::{report, HarnessConfig, OutputFormat};

/// WordBloom: Bloom filter false-positive validation
#[derive(Parser, Debug)]
#[command(name = "wordbloom")]
#[command(about = "Validate Bloom filter false-positive rates against a word list")]
struct Args {
    /// Expected error probability (floating point value in (0, 1))
    #[arg(allow_negative_numbers = true)]
    error_probability: Option<f64>,

    /// Word list, one word per line
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Caesar shift used to derive absent words
    #[arg(short, long)]
    offset: Option<u8>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn load_config(args: &Args) -> HarnessConfig {
    let mut config = HarnessConfig::from_env();

    if let Some(path) = &args.words {
        config.words_path = path.clone();
    }
    if let Some(p) = args.error_probability {
        config.error_probability = Some(p);
    }
    if let Some(offset) = args.offset {
        config.rotation = offset;
    }
    if args.json {
        config.output = OutputFormat::Json;
    }

    config
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();
    let config = load_config(&args);

    let error_probability = config.error_probability.context(
        "First program argument must be expected error probability (as floating point value).",
    )?;

    let trial = bloom_harness::run(&config, error_probability)
        .with_context(|| format!("Trial failed for word list {:?}", config.words_path))?;

    match config.output {
        OutputFormat::Text => print!("{}", report::render_text(&trial)),
        OutputFormat::Json => println!("{}", report::render_json(&trial)?),
    }

    Ok(())
}
