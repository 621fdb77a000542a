#[cfg(feature = "storage-lmdb")]
pub use heed::*;
#[cfg(not(any(feature = "storage-lmdb", feature = "storage-rocksdb")))]
pub use in_memory::*;
#[cfg(feature = "storage-rocksdb")]
pub use rocksdb::*;

#[cfg(all(feature = "storage-lmdb", feature = "storage-rocksdb"))]
compile_error!("Features `storage-lmdb` and `storage-rocksdb` are mutually exclusive");

#[cfg(feature = "storage-lmdb")]
mod heed;
#[cfg(not(any(feature = "storage-lmdb", feature = "storage-rocksdb")))]
mod in_memory;
#[cfg(feature = "storage-rocksdb")]
mod rocksdb;
#[cfg(any(feature = "storage-lmdb", feature = "storage-rocksdb"))]
mod shared;
