use {
    crate::RocksDb,
    nonced_signer::KeyValueStore,
    rocksdb::{AsColumnFamilyRef, WriteOptions},
    std::sync::Arc,
    thiserror::Error,
};

pub const COLUMN_FAMILY: &str = "metadata";

/// The database was opened without the [`COLUMN_FAMILY`] the store keeps its entries in.
#[derive(Debug, Error)]
#[error("column family {COLUMN_FAMILY} is missing, open the database with `open_db`")]
pub struct MissingColumnFamily;

/// Node metadata backed by [`rocksdb`] as its persistent storage engine.
///
/// Entries live in their own column family. Writes are synced to the write-ahead log before
/// [`put`](KeyValueStore::put) returns, so an acknowledged write survives a crash.
#[derive(Debug, Clone)]
pub struct RocksDbMetadataStore {
    db: Arc<RocksDb>,
}

impl RocksDbMetadataStore {
    pub fn new(db: Arc<RocksDb>) -> Result<Self, MissingColumnFamily> {
        if db.cf_handle(COLUMN_FAMILY).is_none() {
            return Err(MissingColumnFamily);
        }

        Ok(Self { db })
    }

    fn cf(&self) -> impl AsColumnFamilyRef + use<'_> {
        // Dropping a column family needs `&mut RocksDb`, which the shared `Arc` never hands out.
        self.db
            .cf_handle(COLUMN_FAMILY)
            .expect("Column family should exist since it was checked in `new`")
    }
}

impl KeyValueStore for RocksDbMetadataStore {
    type Err = rocksdb::Error;

    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, Self::Err> {
        self.db.get_cf(&self.cf(), key)
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), Self::Err> {
        let mut options = WriteOptions::default();
        options.set_sync(true);

        self.db.put_cf_opt(&self.cf(), key, value, &options)
    }
}
