//! Cartkeeper bootstrap binary.
//!
//! Initializes logging, connects to the database, creates the schema, and
//! seeds the starter catalog from config.toml on first run. A UI layer is
//! expected to link against the library; this binary only prepares and
//! inspects the store.

use cartkeeper::config::{catalog, database};
use cartkeeper::errors::Result;
use cartkeeper::session::Session;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing as early as possible
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // .env is optional; environment variables may be set externally
    dotenv().ok();

    let db = database::create_connection().await?;
    database::create_tables(&db).await?;
    info!(url = %database::get_database_url(), "database ready");

    // Seed the starter catalog on first run; a missing config.toml is fine
    match catalog::load_default_config() {
        Ok(config) => {
            let seeded = catalog::seed_catalog(&db, &config).await?;
            if seeded {
                info!("starter catalog seeded");
            }
        }
        Err(e) => warn!("skipping catalog seed: {e}"),
    }

    let session = Session::new(db).await?;
    let lists = session.monthly_lists().await?;
    info!(
        categories = session.categories().len(),
        items = session.items().len(),
        active_entries = session.active_list().len(),
        archived_months = lists.len(),
        "cartkeeper store initialized"
    );

    Ok(())
}
