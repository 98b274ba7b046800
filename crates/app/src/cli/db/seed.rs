use clap::Args;
use kiosk_app::{
    database::{self, Backend, Db},
    domain::payments::{PaymentsService, SqlitePaymentsService},
};

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: SeedArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let seeded = SqlitePaymentsService::new(Db::new(pool, Backend::Sqlite))
        .seed_default_methods()
        .await
        .map_err(|error| format!("failed to seed payment methods: {error}"))?;

    println!("payment_methods_seeded: {seeded}");

    Ok(())
}
