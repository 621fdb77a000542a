use {
    nonced_storage_rocksdb::{RocksDb, RocksDbMetadataStore, open_db},
    std::{path::Path, sync::Arc},
};

pub fn create_db(path: &Path) -> Arc<RocksDb> {
    Arc::new(open_db(path).expect("Database should open in tmpdir"))
}

pub fn create_store(path: &Path) -> RocksDbMetadataStore {
    RocksDbMetadataStore::new(create_db(path)).expect("Column family should exist")
}
