//! Bookrags-Index main entry point
//!
//! This is the command-line interface for the Bookrags-Index client.

use anyhow::Context;
use bookrags_index::config::{load_config, SiteConfig};
use bookrags_index::{BookRags, Credentials};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Bookrags-Index: resolve BookRags links into products and study packs
#[derive(Parser, Debug)]
#[command(name = "bookrags-index")]
#[command(version)]
#[command(about = "Resolve BookRags links into products and study packs", long_about = None)]
struct Cli {
    /// Path to a TOML site configuration (defaults to the live site)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Account username or email address
    #[arg(short, long, env = "BOOKRAGS_USERNAME")]
    username: String,

    /// Account password
    #[arg(short, long, env = "BOOKRAGS_PASSWORD", hide_env_values = true)]
    password: String,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and report whether the session is logged in
    Status,

    /// Resolve a link into a single product
    Product {
        /// Link to a product page
        link: String,
    },

    /// Resolve a link into its study plan and list the study pack
    StudyPack {
        /// Link to a lens or to any product of the work
        link: String,

        /// Also list the lesson plan
        #[arg(long)]
        lesson_plans: bool,
    },

    /// Log in, then log straight back out
    Logout,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?
        }
        None => SiteConfig::default(),
    };

    let credentials = Credentials::new(cli.username, cli.password);
    let client = BookRags::login(config, credentials)
        .await
        .context("Login request failed")?;

    match cli.command {
        Command::Status => handle_status(&client).await,
        Command::Product { link } => handle_product(&client, &link),
        Command::StudyPack { link, lesson_plans } => {
            handle_study_pack(&client, &link, lesson_plans).await
        }
        Command::Logout => handle_logout(&client).await,
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("bookrags_index=info,warn"),
            1 => EnvFilter::new("bookrags_index=debug,info"),
            2 => EnvFilter::new("bookrags_index=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn handle_status(client: &BookRags) -> anyhow::Result<()> {
    let logged_in = client
        .is_logged_in()
        .await
        .context("Account check failed")?;

    if logged_in {
        println!(
            "Logged in as {} at {}",
            client.username(),
            client.config().site.base_url
        );
    } else {
        println!("Not logged in");
    }

    Ok(())
}

fn handle_product(client: &BookRags, link: &str) -> anyhow::Result<()> {
    match client.resolve_product(link) {
        Some(product) => println!("{}\t{}", product.product_type(), product.link()),
        None => println!("Not a product: {}", link),
    }
    Ok(())
}

async fn handle_study_pack(
    client: &BookRags,
    link: &str,
    lesson_plans: bool,
) -> anyhow::Result<()> {
    let Some(lens) = client
        .resolve_study_plan(link)
        .await
        .with_context(|| format!("Failed to resolve study plan for {}", link))?
    else {
        println!("No study plan for: {}", link);
        return Ok(());
    };

    println!("=== {} ===", lens.title()?);
    println!("Lens: {}\n", lens.link());

    let mut products = lens.study_pack();
    if lesson_plans {
        products.extend(lens.lesson_plans());
    }

    for product in &products {
        println!("{}\t{}", product.product_type(), product.link());
    }

    println!("\n{} products", products.len());
    Ok(())
}

async fn handle_logout(client: &BookRags) -> anyhow::Result<()> {
    client.logout().await.context("Logout request failed")?;
    println!("Logged out {}", client.username());
    Ok(())
}
