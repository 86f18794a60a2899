use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use controller::{MemoryView, SubmissionController, SubmitOutcome, FETCH_FAILED};
use model::FormInput;
use rec_client::{ClientConfig, RecommendationClient, DEFAULT_API_BASE};
use render::{HtmlRenderer, TextRenderer};
use std::time::Instant;
use tracing::debug;

/// Assessment recommendations from the command line
#[derive(Parser)]
#[command(name = "assessment-recs")]
#[command(about = "Ask the assessment recommendation service for matching tests", long_about = None)]
struct Cli {
    /// Base URL of the recommendation service
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get assessment recommendations for a hiring requirement
    Recommend {
        /// Hiring requirement text (job description, skills, constraints)
        query: String,

        /// Maximum number of assessments (coerced into 1..=10)
        #[arg(long, allow_hyphen_values = true)]
        limit: Option<String>,

        /// Prefer assessments that support remote testing
        #[arg(long)]
        prefer_remote: bool,

        /// Prefer assessments that support adaptive testing
        #[arg(long)]
        prefer_adaptive: bool,

        /// How to print the results area
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Show assessment descriptions (text format only)
        #[arg(long)]
        explain: bool,
    },

    /// Check that the recommendation service is up
    Health,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Html,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ClientConfig::new(&cli.api_base)
        .with_context(|| format!("Invalid --api-base '{}'", cli.api_base))?;
    let client = RecommendationClient::new(config);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            query,
            limit,
            prefer_remote,
            prefer_adaptive,
            format,
            explain,
        } => {
            let input = FormInput {
                query,
                limit: limit.unwrap_or_default(),
                prefer_remote,
                prefer_adaptive,
            };
            handle_recommend(client, input, format, explain).await?
        }
        Commands::Health => handle_health(client).await?,
    }

    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(
    client: RecommendationClient,
    input: FormInput,
    format: Format,
    explain: bool,
) -> Result<()> {
    let view = MemoryView::new().with_input(input);
    let mut controller = match format {
        Format::Text => SubmissionController::attach(view, client, TextRenderer::new(explain)),
        Format::Html => SubmissionController::attach(view, client, HtmlRenderer),
    }
    .context("Failed to set up the query form")?;

    let start = Instant::now();
    let outcome = controller.submit().await;
    debug!("Submission finished in {:?}", start.elapsed());

    let view = controller.view();
    if let Some(message) = view.error() {
        eprintln!("{} {}", "✗".red(), message.red());
    }
    if !view.meta().is_empty() {
        println!("{}", view.meta().bold().blue());
    }
    println!("{}", view.results());

    match outcome {
        SubmitOutcome::Rendered { .. } => Ok(()),
        SubmitOutcome::Rejected(err) => Err(anyhow!(err)),
        SubmitOutcome::Failed(err) => Err(anyhow!(err).context(FETCH_FAILED)),
    }
}

/// Handle the 'health' command
async fn handle_health(client: RecommendationClient) -> Result<()> {
    let base = client.config().api_base().to_string();
    let health = client
        .health()
        .await
        .with_context(|| format!("Health check against {} failed", base))?;

    if health.is_healthy() {
        println!("{} {} is {}", "✓".green(), base, health.status.green());
        Ok(())
    } else {
        println!("{} {} reports '{}'", "✗".red(), base, health.status.yellow());
        Err(anyhow!("Service reported status '{}'", health.status))
    }
}
