// travelhub-seeder/src/main.rs

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use travelhub_core::seed::SeedSummary;
use travelhub_core::{Database, Error, seed};

#[derive(Parser, Debug, Clone)]
#[command(name = "travelhub-seeder")]
#[command(author, version, about = "GlobalTravelHub - development database seeder")]
struct Args {
    /// Postgres connection URL.
    #[arg(long, env = "DATABASE_URL", default_value = "postgres://travelhub@localhost:5432/travelhub")]
    db_url: String,

    /// Assume the schema already exists instead of applying migrations.
    #[arg(long, default_value = "false")]
    skip_migrations: bool,
}

fn init_tracing() {
    let filter = EnvFilter::from_default_env()
        .add_directive("travelhub_core=info".parse().unwrap_or_default())
        .add_directive("travelhub_seeder=info".parse().unwrap_or_default());
    let sub = fmt().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(sub)
        .expect("Failed to set global subscriber");
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_tracing();
    let args = Args::parse();
    info!("travelhub-seeder starting. db_url={}", args.db_url);

    match run(args).await {
        Ok(summary) => {
            info!("{}", summary);
        }
        Err(e) => {
            error!("Seeding failed: {e}");
            // Full error detail on stderr; progress stays on stdout.
            eprintln!("seeding failed: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(args: Args) -> Result<SeedSummary, Error> {
    let db = Database::new(&args.db_url).await?;

    // The pool is released exactly once, whatever the seed outcome.
    let result = async {
        if !args.skip_migrations {
            db.migrate().await?;
        }
        seed::run(&db).await
    }
    .await;

    db.close().await;
    result
}
