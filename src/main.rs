//! FixItNow Insights CLI
//!
//! Terminal front end for the admin analytics dashboard:
//! - Render the dashboard
//! - Store or clear the admin session
//! - Replay a payload snapshot for local development

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use fixitnow_insights::config::generate_default_config;
use fixitnow_insights::dashboard::{self, DashboardState, DashboardView, Navigator, Notifier, Route};
use fixitnow_insights::{AnalyticsClient, Config, FileSession, FixtureState, TextRenderer};

#[derive(Parser)]
#[command(name = "fixitnow-insights")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "FixItNow admin analytics dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/fixitnow/insights.toml or ./insights.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend API base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch and render the analytics dashboard
    Dashboard,

    /// Store an admin token for later requests
    Login {
        /// Bearer token issued by the FixItNow backend
        token: String,
    },

    /// Clear the stored admin session
    Logout,

    /// Serve a payload snapshot at /analytics/admin/dashboard
    ServeFixture {
        /// JSON snapshot file
        #[arg(short, long)]
        payload: Option<PathBuf>,
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,
        /// Require this bearer token
        #[arg(long)]
        token: Option<String>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Transient alerts go to stderr
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn error(&self, message: &str) {
        eprintln!("✕ {}", message);
    }
}

/// Terminal stand-in for page navigation
struct CliNavigator;

impl Navigator for CliNavigator {
    fn navigate(&self, route: Route) {
        match route {
            Route::AdminLogin => {
                println!("Signed out. Run `fixitnow-insights login <token>` to sign in again.")
            }
            Route::AdminDashboard | Route::AdminInsights => {
                println!("Run `fixitnow-insights dashboard` to view analytics.")
            }
        }
    }
}

/// What `dashboard` writes to stdout for the settled state
///
/// JSON mode only ever prints the payload, so a failed load prints nothing
/// there; the notifier has already reported it on stderr.
fn dashboard_output(
    format: OutputFormat,
    state: &DashboardState,
    bar_width: usize,
) -> serde_json::Result<Option<String>> {
    match (format, state) {
        (OutputFormat::Json, DashboardState::Ready(payload)) => {
            Ok(Some(format!("{}\n", serde_json::to_string_pretty(payload)?)))
        }
        (OutputFormat::Json, _) => Ok(None),
        (OutputFormat::Text, _) => Ok(Some(TextRenderer::new(bar_width).render(state))),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    fixitnow_insights::logging::init(&config.logging);

    let session = FileSession::new(&config.session.file);

    match cli.command {
        Commands::Dashboard => {
            let token = config.api.token.clone().or_else(|| session.token());
            if token.is_none() {
                tracing::warn!("No admin token configured; the backend may reject the request");
            }

            let client = AnalyticsClient::new(&config.api, token)
                .context("Failed to create HTTP client")?;
            tracing::info!("Loading analytics from {}", client.url());

            let mut view = DashboardView::new(client, StderrNotifier, session, CliNavigator);
            let state = view.mount().await;

            if let Some(output) = dashboard_output(cli.format, state, config.display.bar_width)? {
                print!("{}", output);
            }

            if !state.has_payload() {
                std::process::exit(1);
            }
        }

        Commands::Login { token } => {
            let stored = session.login(&token)?;
            println!(
                "Saved admin session at {} ({})",
                stored.saved_at.format("%Y-%m-%d %H:%M:%S UTC"),
                session.path().display()
            );
        }

        Commands::Logout => {
            dashboard::logout(&session, &CliNavigator);
        }

        Commands::ServeFixture {
            payload,
            host,
            port,
            token,
        } => {
            let mut fixture = config.fixture.clone();
            if let Some(host) = host {
                fixture.host = host;
            }
            if let Some(port) = port {
                fixture.port = port;
            }
            let token = token.or(fixture.token.clone());

            let path = payload
                .or(fixture.payload.clone())
                .context("No payload snapshot given (use --payload or [fixture].payload)")?;

            let state = FixtureState::from_file(&path, token)?;
            tracing::info!("Serving {:?} on {}", path, fixture.addr());

            fixitnow_insights::fixture::serve(state, &fixture.addr()).await?;
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Wrote default config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixitnow_insights::{AnalyticsPayload, TopService};

    fn ready() -> DashboardState {
        DashboardState::Ready(AnalyticsPayload {
            top_services: vec![TopService {
                title: "Plumbing".to_string(),
                booking_count: 3,
            }],
            ..Default::default()
        })
    }

    #[test]
    fn test_json_output_is_payload() {
        let output = dashboard_output(OutputFormat::Json, &ready(), 40)
            .unwrap()
            .unwrap();

        let decoded: AnalyticsPayload = serde_json::from_str(&output).unwrap();
        assert_eq!(decoded.top_services[0].title, "Plumbing");
    }

    #[test]
    fn test_json_output_empty_on_failure() {
        let output = dashboard_output(OutputFormat::Json, &DashboardState::Empty, 40).unwrap();
        assert!(output.is_none());
    }

    #[test]
    fn test_text_output_on_failure() {
        let output = dashboard_output(OutputFormat::Text, &DashboardState::Empty, 40)
            .unwrap()
            .unwrap();
        assert!(output.contains("No analytics data available"));
    }
}
