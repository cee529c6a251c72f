//! CLI for the ascult link canonicalizer.

mod commands;

use anyhow::Result;
use ascult_core::config;
use ascult_core::store::UrlDb;
use clap::{Parser, Subcommand};

use commands::{run_add, run_classify, run_list, run_remove, run_show};

/// Top-level CLI for ascult.
#[derive(Debug, Parser)]
#[command(name = "ascult")]
#[command(about = "ascult: canonical links for YouTube, SoundCloud and Mixcloud", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Store the canonical form of a link (or find the existing record).
    Add {
        /// Link to a YouTube video, SoundCloud track or Mixcloud mix.
        url: String,
    },

    /// Show which provider a link belongs to and its canonical form. Does not touch the database.
    Classify {
        /// Link to inspect.
        url: String,
    },

    /// List stored links, newest first.
    List {
        /// Include removed links.
        #[arg(long)]
        all: bool,
    },

    /// Show one stored link with its metadata.
    Show {
        /// Link identifier.
        id: i64,
    },

    /// Remove a link. The row is kept but hidden, and the identity can be added again.
    Remove {
        /// Link identifier.
        id: i64,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Classification is pure; skip config and database for it.
        if let CliCommand::Classify { url } = cli.command {
            return run_classify(&url);
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let db = UrlDb::open_configured(&cfg).await?;

        match cli.command {
            CliCommand::Add { url } => run_add(&db, &cfg, &url).await?,
            CliCommand::List { all } => run_list(&db, all).await?,
            CliCommand::Show { id } => run_show(&db, id).await?,
            CliCommand::Remove { id } => run_remove(&db, id).await?,
            CliCommand::Classify { url } => run_classify(&url)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
