use {
    super::shared::prepare_db_dir,
    crate::config::Config,
    anyhow::Context,
    nonced_storage_rocksdb::{RocksDbMetadataStore, open_db},
    std::sync::Arc,
};

pub type SharedStorage = RocksDbMetadataStore;

pub fn storage(config: &Config) -> anyhow::Result<SharedStorage> {
    prepare_db_dir(config)?;

    let db = open_db(&config.db_path)
        .with_context(|| format!("RocksDB database {} should open", config.db_path.display()))?;

    Ok(RocksDbMetadataStore::new(Arc::new(db))?)
}
