//! CLI entry point for blog-rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blog-rs")]
#[command(version)]
#[command(about = "Load, inspect and scaffold blog posts", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, newest first
    #[command(alias = "ls")]
    List,

    /// Print a post as JSON
    Show {
        /// Slug of the post (file name without extension)
        slug: String,
    },

    /// Render the author card of a post as HTML
    Author {
        /// Slug of the post
        slug: String,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Summary line for the header
        #[arg(short, long, default_value = "")]
        summary: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blog_rs=debug,info"
    } else {
        "blog_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    match cli.command {
        Commands::List => {
            let blog = blog_rs::Blog::new(&base_dir)?;
            blog_rs::commands::list::run(&blog)?;
        }

        Commands::Show { slug } => {
            let blog = blog_rs::Blog::new(&base_dir)?;
            blog_rs::commands::show::run(&blog, &slug)?;
        }

        Commands::Author { slug } => {
            let blog = blog_rs::Blog::new(&base_dir)?;
            blog_rs::commands::author::run(&blog, &slug)?;
        }

        Commands::New { title, summary } => {
            let blog = blog_rs::Blog::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            blog_rs::commands::new::run(&blog, &title, &summary)?;
        }

        Commands::Version => {
            println!("blog-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
