//! portal - submit and browse creative work
//!
//! CLI front end for the submission portal core.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

#[derive(Parser)]
#[command(name = "portal")]
#[command(about = "Submit, browse and edit creative work")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List your submissions
    List {
        /// User id
        #[arg(short, long)]
        user: String,

        /// Filter: none, approved or current
        #[arg(short, long, default_value = "none")]
        filter: String,
    },

    /// List publication issues
    Issues,

    /// Submit a new work
    Submit {
        /// User id
        #[arg(short, long)]
        user: String,

        /// Title of the work
        #[arg(long)]
        title: String,

        /// Author or pen name
        #[arg(long)]
        author: String,

        /// Issue the work targets (defaults to the current issue)
        #[arg(long)]
        issue: Option<String>,

        /// Main file
        #[arg(long)]
        file: PathBuf,

        /// Media type of the main file
        #[arg(long = "type", default_value = "Image")]
        media_type: String,

        /// Description of the main file
        #[arg(long, default_value = "")]
        description: String,

        /// Additional reference: <path>[:type[:description]] (repeatable, order kept)
        #[arg(long = "reference")]
        references: Vec<String>,
    },

    /// Edit one of your submissions
    Edit {
        /// User id
        #[arg(short, long)]
        user: String,

        /// Submission id
        #[arg(long)]
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New author
        #[arg(long)]
        author: Option<String>,

        /// New description of the main file
        #[arg(long)]
        description: Option<String>,

        /// New target issue
        #[arg(long)]
        issue: Option<String>,
    },
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(
                    "submission_portal=info"
                        .parse()
                        .expect("hardcoded default directive is valid"),
                )
                .from_env_lossy(),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Commands::List { user, filter } => {
            cli::run_list(&user, &filter).await?;
        }
        Commands::Issues => {
            cli::run_issues().await?;
        }
        Commands::Submit {
            user,
            title,
            author,
            issue,
            file,
            media_type,
            description,
            references,
        } => {
            let args = cli::SubmitArgs {
                user,
                title,
                author,
                issue,
                file,
                media_type,
                description,
                references,
            };
            cli::run_submit(args).await?;
        }
        Commands::Edit {
            user,
            id,
            title,
            author,
            description,
            issue,
        } => {
            let args = cli::EditArgs {
                user,
                id,
                title,
                author,
                description,
                issue,
            };
            cli::run_edit(args).await?;
        }
    }

    Ok(())
}
