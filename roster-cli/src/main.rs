//! roster CLI - query course rosters from PostgreSQL
//!
//! - `users --course <ID>`: users enrolled in a course
//! - `courses --user <ID>`: courses a user is enrolled in
//! - `projects --user <ID>`: projects across a user's courses
//! - `migrate`: create the roster tables
//! - `config`: inspect configuration

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use roster_db::{CourseRepo, PgPool, ProjectRepo, UserRepo};
use tracing::{debug, info, warn};

mod config;
mod output;
mod tracing_setup;

use config::RosterConfig;
use output::{render, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    author,
    version,
    about = "Query users, courses and projects joined through course membership"
)]
struct Cli {
    /// PostgreSQL connection URL (overrides ~/.roster/config.toml)
    #[arg(long, env = "DATABASE_URL", global = true, hide_env_values = true)]
    database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    max_connections: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List users enrolled in a course
    Users(UsersArgs),
    /// List courses a user is enrolled in
    Courses(UserKeyArgs),
    /// List projects belonging to a user's courses
    Projects(UserKeyArgs),
    /// Apply schema migrations
    Migrate,
    /// Inspect configuration (path, show)
    Config(config::ConfigArgs),
}

#[derive(Args, Debug)]
struct UsersArgs {
    /// Course identifier
    #[arg(long)]
    course: i64,
}

#[derive(Args, Debug)]
struct UserKeyArgs {
    /// User identifier
    #[arg(long)]
    user: i64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv_files = config::load_dotenv();
    let cli = Cli::parse();

    let file_config = RosterConfig::load()?;
    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        level: file_config.log_level.clone(),
    })?;

    for (path, result) in dotenv_files {
        match result {
            Ok(()) => debug!("Loaded .env from {}", path.display()),
            Err(e) => warn!("Failed to load {}: {}", path.display(), e),
        }
    }
    if let Some(path) = config::config_path().filter(|path| path.exists()) {
        debug!("Loaded config from {}", path.display());
    }

    let config = file_config.with_overrides(cli.database_url, cli.max_connections);

    match cli.command {
        Commands::Config(args) => config::run_config(args, &config),
        Commands::Migrate => {
            let pool = connect(&config).await?;
            roster_db::db::migrations::run(&pool).await?;
            info!("schema is up to date");
            Ok(())
        }
        Commands::Users(args) => {
            let pool = connect(&config).await?;
            let users = UserRepo::new(&pool)
                .for_course(args.course)
                .await
                .with_context(|| format!("Failed to fetch users for course {}", args.course))?;
            print_records(&users, cli.format)
        }
        Commands::Courses(args) => {
            let pool = connect(&config).await?;
            let courses = CourseRepo::new(&pool)
                .for_user(args.user)
                .await
                .with_context(|| format!("Failed to fetch courses for user {}", args.user))?;
            print_records(&courses, cli.format)
        }
        Commands::Projects(args) => {
            let pool = connect(&config).await?;
            let projects = ProjectRepo::new(&pool)
                .for_user(args.user)
                .await
                .with_context(|| format!("Failed to fetch projects for user {}", args.user))?;
            print_records(&projects, cli.format)
        }
    }
}

async fn connect(config: &RosterConfig) -> Result<PgPool> {
    info!(
        url = %config.database.redacted_url(),
        max_connections = config.database.max_connections,
        "connecting"
    );
    roster_db::create_pool_with_options(
        &config.database.url,
        config.database.max_connections,
        config.database.acquire_timeout(),
    )
    .await
    .with_context(|| format!("Failed to connect to {}", config.database.redacted_url()))
}

fn print_records<T>(records: &[T], format: OutputFormat) -> Result<()>
where
    T: output::TableRow + serde::Serialize,
{
    println!("{}", render(records, format)?);
    Ok(())
}
