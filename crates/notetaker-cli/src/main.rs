mod config;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notetaker_core::{MedicalExtractor, Notetaker, SAMPLE_TRANSCRIPT};

use config::Settings;

const RULE_WIDTH: usize = 80;

/// Main entry point for the physician notetaker
///
/// Runs the full pipeline over the built-in sample consultation, prints the
/// medical summary, sentiment analysis and SOAP note as JSON on stdout, and
/// writes them to `medical_summary.json`, `sentiment_analysis.json` and
/// `soap_note.json`. Logs go to stderr.
///
/// # Environment Variables
/// - `NOTETAKER_OUTPUT_DIR`: where the documents are written (default: ".")
/// - `NOTETAKER_SENTIMENT_MODEL`: pretrained sentiment model directory (optional)
/// - `NOTETAKER_TOKEN_MATCHER`: token-level symptom matcher on/off (default: true)
/// - `NOTETAKER_MAX_KEYWORDS`: keyword phrase cap (default: 10)
/// - `RUST_LOG`: log filter (default directive: "notetaker=info")
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("notetaker=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings::from_env().context("invalid notetaker configuration")?;
    tracing::debug!(?settings, "configuration loaded");

    let extractor = MedicalExtractor::with_options(settings.extractor.clone());
    let analyzer = notetaker_model::analyzer_from_dir(settings.sentiment_model.as_deref());
    let notetaker = Notetaker::with_parts(extractor, analyzer);

    let report = notetaker.run(SAMPLE_TRANSCRIPT);

    banner("1. MEDICAL NLP SUMMARIZATION");
    println!("{}", report.summary_json()?);

    banner("2. SENTIMENT & INTENT ANALYSIS");
    println!("{}", report.sentiment_json()?);

    banner("3. SOAP NOTE GENERATION");
    println!("{}", report.soap_json()?);

    let paths = report
        .write_to(&settings.output_dir)
        .with_context(|| format!("failed to write documents to {}", settings.output_dir.display()))?;

    println!();
    for path in [&paths.summary, &paths.sentiment, &paths.soap] {
        println!("[OK] Saved: {}", path.display());
    }

    Ok(())
}

fn banner(title: &str) {
    println!();
    println!("{title}");
    println!("{}", "=".repeat(RULE_WIDTH));
}
