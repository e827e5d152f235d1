use std::sync::Arc;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use newspost::banner::{BannerInfo, print_banner};
use newspost::config::Config;
use newspost::engine::Engine;
use newspost::engine::pipeline::PostPipeline;
use newspost::model::LanguageModel;
use newspost::model::gemini::GeminiModel;
use newspost::post::PostResult;
use newspost::search::SearchClient;
use newspost::search::tavily::TavilySearch;
use newspost::server::router;
use newspost::spinner::Spinner;

#[derive(Parser)]
#[command(name = "newspost", version, about = "This week's news, in a post.")]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to bind the HTTP server to
    #[arg(short, long, env = "PORT", default_value_t = 8000)]
    port: u16,

    /// Gemini model name (overrides GEMINI_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Generate a single post for this topic, print it, and exit
    #[arg(short, long)]
    run: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env first so clap's env fallbacks see it too
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,newspost=debug,tower_http=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let client = config.http_client()?;

    let search = Arc::new(TavilySearch::new(
        config.tavily_api_key.clone(),
        config.tavily_base_url.clone(),
        client.clone(),
    ));
    let model = Arc::new(GeminiModel::new(
        cli.model.or(config.model.clone()),
        config.google_api_key.clone(),
        config.gemini_base_url.clone(),
        client,
    ));
    let model_name = model.model().to_string();
    let search_name = search.name().to_string();

    let pipeline = Arc::new(PostPipeline::new(search, model));

    // Single topic mode
    if let Some(topic) = cli.run {
        return run_once(&pipeline, &topic).await;
    }

    let address = format!("{}:{}", cli.host, cli.port);
    print_banner(&BannerInfo {
        address: &address,
        model: &model_name,
        search: &search_name,
    });

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(%address, model = %model_name, "listening");

    axum::serve(listener, router(pipeline))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shut down");
    Ok(())
}

async fn run_once(pipeline: &PostPipeline, topic: &str) -> anyhow::Result<()> {
    if topic.trim().is_empty() {
        bail!("topic must be a non-empty string");
    }

    let spinner = Spinner::follow(pipeline.subscribe());
    let result = pipeline
        .run(topic)
        .await
        .map(|output| PostResult::from_output(topic, output));
    spinner.stop().await;

    let post = result?;
    println!("{}", serde_json::to_string_pretty(&post)?);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
    }
}
