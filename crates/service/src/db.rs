use std::time::Duration;

use bson::doc;
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, Database, IndexModel};
use tracing::info;

use configs::DatabaseConfig;

use crate::mongo::PROGRAMS_COLLECTION;

/// Open the client and return the configured database handle. The handle is
/// created once at startup and injected into the repositories.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<Database> {
    let mut options = ClientOptions::parse(&cfg.url).await?;
    options.app_name = Some("biodata_api".to_string());
    options.connect_timeout = Some(Duration::from_secs(cfg.connect_timeout_secs));
    options.max_pool_size = Some(cfg.max_pool_size);
    let client = Client::with_options(options)?;
    info!(database = %cfg.database, "mongodb client configured");
    Ok(client.database(&cfg.database))
}

/// Build the unique index on `programs.name`. Run once at startup; the index
/// is what makes concurrent duplicate creations safe (one insert wins, the
/// other gets a duplicate-key error).
pub async fn ensure_indexes(db: &Database) -> anyhow::Result<()> {
    let programs: Collection<bson::Document> = db.collection(PROGRAMS_COLLECTION);
    let index = IndexModel::builder()
        .keys(doc! { "name": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();
    programs.create_index(index, None).await?;
    info!(collection = PROGRAMS_COLLECTION, "unique name index ensured");
    Ok(())
}
