pub use {
    all::{COLUMN_FAMILIES, open_db},
    metadata::{MissingColumnFamily, RocksDbMetadataStore},
    rocksdb::{self, DB as RocksDb},
};

mod all;
pub mod metadata;
