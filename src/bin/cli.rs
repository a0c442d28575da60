// Literalura - Personal Book Catalog
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use literalura::api::{ClientConfig, GutendexClient, DEFAULT_BASE_URL};
use literalura::shell::render;
use literalura::{CatalogService, Database, Shell};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "literalura")]
#[command(about = "Literalura - personal book catalog backed by Gutendex", long_about = None)]
#[command(version)]
struct Cli {
    /// SQLite database file
    #[arg(long, env = "LITERALURA_DATABASE")]
    database: Option<PathBuf>,

    /// Gutendex search endpoint
    #[arg(long, env = "LITERALURA_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// HTTP request timeout in seconds
    #[arg(long, env = "LITERALURA_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive menu (default)
    Shell,
    /// Search a title once and save the first match
    Search {
        /// Book title
        title: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so they stay out of the menu
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "literalura=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let db_path = cli.database.unwrap_or_else(Database::get_default_path);
    tracing::info!(path = %db_path.display(), "opening catalog database");
    let db = Database::new(&db_path)
        .await
        .with_context(|| format!("Failed to open database at {}", db_path.display()))?;

    let config = ClientConfig::builder()
        .base_url(cli.base_url)
        .timeout(Duration::from_secs(cli.timeout_secs))
        .build();
    let client = GutendexClient::with_config(config).context("Failed to configure catalog client")?;

    let service = CatalogService::new(db, client);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = io::stdin();
            let mut shell = Shell::new(&service, stdin.lock(), io::stdout());
            shell.run().await.context("Console I/O failed")?;
        }
        Commands::Search { title } => {
            let mut stdout = io::stdout();
            match service.search_and_save(&title).await {
                Ok(book) => render::saved_book(&mut stdout, &book)?,
                Err(e) => {
                    render::error(&mut stdout, &e.user_message())?;
                    stdout.flush()?;
                    service.close().await?;
                    std::process::exit(1);
                }
            }
            stdout.flush()?;
        }
    }

    service.close().await?;
    Ok(())
}
