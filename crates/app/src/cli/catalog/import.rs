use std::path::PathBuf;

use clap::Args;
use kiosk::catalog::Catalog;
use kiosk_app::{
    database::{self, Backend, Db},
    domain::{categories::SqliteCategoriesService, products::SqliteProductsService},
    import::import_catalog,
};

#[derive(Debug, Args)]
pub(crate) struct ImportArgs {
    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Catalog file; the built-in demo catalog when omitted
    #[arg(long)]
    file: Option<PathBuf>,
}

pub(crate) async fn run(args: ImportArgs) -> Result<(), String> {
    let catalog = match &args.file {
        Some(path) => Catalog::from_path(path),
        None => Catalog::demo(),
    }
    .map_err(|error| format!("failed to load catalog: {error}"))?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"))?;

    let db = Db::new(pool, Backend::Sqlite);

    let summary = import_catalog(
        &catalog,
        &SqliteCategoriesService::new(db.clone()),
        &SqliteProductsService::new(db),
    )
    .await
    .map_err(|error| format!("failed to import catalog: {error}"))?;

    println!("products_created: {}", summary.created);
    println!("products_skipped: {}", summary.skipped);

    Ok(())
}
