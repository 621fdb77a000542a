use {
    crate::{RocksDb, metadata},
    rocksdb::Options,
    std::path::Path,
};

pub const COLUMN_FAMILIES: [&str; 1] = [metadata::COLUMN_FAMILY];

/// Opens the database at `path`, creating it and every column family in [`COLUMN_FAMILIES`]
/// that does not exist yet.
pub fn open_db(path: impl AsRef<Path>) -> Result<RocksDb, rocksdb::Error> {
    let path = path.as_ref();

    let mut options = Options::default();
    options.create_if_missing(true);
    options.create_missing_column_families(true);

    let db = RocksDb::open_cf(&options, path, COLUMN_FAMILIES)?;

    tracing::debug!(path = %path.display(), "Opened RocksDB database");

    Ok(db)
}
