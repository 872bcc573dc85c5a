use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;

use slidecast_core::{
    ChatCompletionSummarizer, PresentationAssembler, Provider, StrategyHint, YtDlpSource,
    format_presentation_readable,
};

/// CLI wrapper for Provider enum (needed for clap ValueEnum)
#[derive(Clone, Default, ValueEnum)]
enum CliProvider {
    #[default]
    Openai,
    Grok,
    Gemini,
}

impl From<CliProvider> for Provider {
    fn from(cli: CliProvider) -> Self {
        match cli {
            CliProvider::Openai => Provider::Openai,
            CliProvider::Grok => Provider::Grok,
            CliProvider::Gemini => Provider::Gemini,
        }
    }
}

#[derive(Parser)]
#[command(name = "slidecast")]
#[command(about = "Turn a YouTube video into a structured slide deck")]
struct Cli {
    /// Video URL
    url: String,

    /// Use an AI provider to summarize the video into slides
    #[arg(short, long)]
    summarize: bool,

    /// AI provider for summarization
    #[arg(short, long, default_value = "openai")]
    provider: CliProvider,

    /// Write the presentation JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let provider: Provider = cli.provider.into();

    let mut assembler = PresentationAssembler::new(YtDlpSource::default());
    let hint = if cli.summarize {
        // Validate the credential early, before any fetches happen.
        let api_key = match provider.api_key_from_env() {
            Ok(key) => key,
            Err(e) => {
                eprintln!("{} {}", style("Error:").red().bold(), e);
                std::process::exit(1);
            }
        };
        assembler = assembler.with_summarizer(Box::new(ChatCompletionSummarizer::new(
            provider, api_key,
        )?));
        StrategyHint::Summarize
    } else {
        StrategyHint::Auto
    };

    println!(
        "\n{}  {}\n",
        style("slidecast").cyan().bold(),
        style("Video to Slides").dim()
    );

    let spinner = create_spinner("Assembling presentation...");
    let presentation = assembler.assemble(&cli.url, hint).await;
    spinner.finish_with_message(format!(
        "{} Assembled {} slides",
        style("✓").green().bold(),
        style(presentation.slides.len()).yellow()
    ));

    if let Some(path) = &cli.output {
        let pretty_json = serde_json::to_string_pretty(&presentation)?;
        fs::write(path, &pretty_json).await?;
        println!(
            "\n{} {}",
            style("Saved:").dim(),
            style(path.display()).cyan()
        );
    }

    println!("\n{}\n", style("─".repeat(60)).dim());

    // Human-readable output
    let readable = format_presentation_readable(&presentation);
    println!("{}", readable);

    Ok(())
}
