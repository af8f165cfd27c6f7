use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::{fs::OpenOptions, sync::Mutex};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use bizdir::api::BusinessClient;
use bizdir::config::{self, Config};
use bizdir::layout::{LayoutFrame, LayoutOrchestrator};
use bizdir::logic::errors::user_facing_title;
use bizdir::logic::formatting::{business_image_url, convert_to_display_format, format_social_url};
use bizdir::messages::LayoutMsg;
use bizdir::services::{HistoryRouter, TracingAnimations};
use bizdir::session::{InMemorySession, UserProfile};

mod utils;

/// Business directory client
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/bizdir-debug.log
    #[arg(short, long, global = true)]
    debug: bool,

    /// Path to config file (default: platform-specific, then ./config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// API base URL (overrides BIZDIR_API_BASE_URL and the config file)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch a business profile and print it
    Show {
        /// Business identifier (timestamp component)
        id: String,

        /// Print the display format as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay page-shell events and print what is rendered after each one
    Layout {
        /// Path the page mounts on
        #[arg(long, default_value = "/")]
        path: String,

        /// Start signed in as this user
        #[arg(long)]
        user: Option<String>,

        /// Events: a /path, or one of profile, logout, close, browse
        events: Vec<LayoutMsg>,
    },
}

fn init_logging(debug: bool) -> Result<()> {
    if debug {
        let log_path = utils::get_debug_log_path();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open debug log {}", log_path.display()))?;

        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("bizdir=debug"))
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

fn load_config(cli_path: Option<&str>) -> Result<Config> {
    match config::get_config_path(cli_path)? {
        Some(path) => {
            debug!(path = %path.display(), "Loading config");
            Config::load(&path)
        }
        None => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

async fn show_business(client: &BusinessClient, id: &str, json: bool) -> Result<()> {
    let business = match client.get_business_by_id(id).await {
        Ok(business) => business,
        Err(e) => anyhow::bail!("{}: {} (status {})", user_facing_title(&e), e, e.status()),
    };
    let display = convert_to_display_format(&business);

    if json {
        println!("{}", serde_json::to_string_pretty(&display)?);
        return Ok(());
    }

    println!("{} [{}]", display.name, display.category);
    println!("  Location: {}", display.location);
    println!("  Address:  {}", display.full_address);
    println!("  Size:     {}", display.company_size);
    println!("  Founded:  {}", display.founded_year);
    println!("  Image:    {}", business_image_url(&business, 0));
    if let Some(created) = business.id.created_at() {
        println!("  Listed:   {}", created.format("%Y-%m-%d"));
    }
    for link in &display.available_platforms {
        println!("  {:<9} {}", format!("{}:", link.platform.label()), format_social_url(&link.url));
    }
    if !display.description.is_empty() {
        println!();
        println!("{}", display.description);
    }

    Ok(())
}

fn describe_frame(frame: &LayoutFrame<'_>) -> String {
    let mut regions = Vec::new();

    if let Some(nav) = &frame.nav {
        match nav.user {
            Some(user) => regions.push(format!("nav(user={})", user.name)),
            None => regions.push("nav(guest)".to_string()),
        }
    }
    regions.push("main".to_string());
    if frame.footer {
        regions.push("footer".to_string());
    }
    if let Some(user) = frame.profile_modal {
        regions.push(format!("profile-modal({})", user.name));
    }

    regions.join(" ")
}

fn replay_layout(path: &str, user: Option<String>, events: Vec<LayoutMsg>) {
    let session = match user {
        Some(name) => InMemorySession::logged_in(UserProfile {
            id: name.clone(),
            name,
            email: String::new(),
            avatar_url: None,
        }),
        None => InMemorySession::new(),
    };

    let mut layout =
        LayoutOrchestrator::mount(session, HistoryRouter::new(path), TracingAnimations::new());
    println!("{:<24} {}", layout.model().path, describe_frame(&layout.frame()));

    for event in events {
        let label = format!("{:?}", event);
        layout.update(event);
        println!("{:<24} {}", label, describe_frame(&layout.frame()));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.debug)?;

    let config = load_config(args.config.as_deref())?;
    let env_base_url = std::env::var(config::BASE_URL_ENV).ok();
    let base_url = config::resolve_base_url(args.base_url.as_deref(), env_base_url.as_deref(), &config);
    debug!(%base_url, "Resolved API base URL");

    match args.command {
        Command::Show { id, json } => {
            let client = BusinessClient::new(base_url);
            show_business(&client, &id, json).await?;
        }
        Command::Layout { path, user, events } => {
            replay_layout(&path, user, events);
        }
    }

    Ok(())
}
