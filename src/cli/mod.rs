pub mod app;
pub mod error;
pub mod input;
pub mod paths;
pub mod utils;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::app::ProjectsApp;
use crate::cli::error::CliResult;
use crate::db::{Database, SqliteDatabase};
use crate::service::ProjectService;

#[derive(Parser)]
#[command(name = "projects")]
#[command(author, version, about = "Interactive project manager", long_about = None)]
pub struct Cli {
    /// Database file path (default: PROJECTS_DB env or ~/.local/share/projects/projects.db)
    #[arg(long, conflicts_with = "in_memory")]
    pub db: Option<PathBuf>,

    /// Use a throwaway in-memory database
    #[arg(long)]
    pub in_memory: bool,
}

/// Initialize tracing subscriber with env filter.
///
/// Logs go to stderr so they never interleave with prompts on stdout.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "projects=error".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

async fn open_database(cli: &Cli) -> CliResult<SqliteDatabase> {
    let db = if cli.in_memory {
        SqliteDatabase::in_memory().await?
    } else {
        let db_path = paths::resolve_db_path(cli.db.clone());
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        info!(path = %db_path.display(), "Opening database");
        SqliteDatabase::open(&db_path).await?
    };

    db.migrate().await?;
    Ok(db)
}

pub async fn run() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let db = open_database(&cli).await?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = ProjectsApp::new(ProjectService::new(db), stdin.lock(), stdout.lock());
    app.run().await?;
    Ok(())
}

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;



#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["projects"]).unwrap();
        assert!(cli.db.is_none());
        assert!(!cli.in_memory);
    }

    #[test]
    fn test_cli_db_flag() {
        let cli = Cli::try_parse_from(["projects", "--db", "/tmp/p.db"]).unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/p.db")));
    }

    #[test]
    fn test_cli_db_conflicts_with_in_memory() {
        let result = Cli::try_parse_from(["projects", "--db", "/tmp/p.db", "--in-memory"]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_open_database_in_memory_is_migrated() {
        let cli = Cli::try_parse_from(["projects", "--in-memory"]).unwrap();
        let db = open_database(&cli).await.expect("Open should succeed");
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM project")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_open_database_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("projects.db");
        let cli = Cli::try_parse_from(["projects", "--db", path.to_str().unwrap()]).unwrap();

        open_database(&cli).await.expect("Open should succeed");
        assert!(path.is_file());
    }
}
