use {
    heed::{Env, types::Bytes},
    nonced_signer::KeyValueStore,
};

pub type Key = Bytes;
pub type Value = Bytes;
pub type Db = heed::Database<Key, Value>;

pub const DB: &str = "metadata";

/// Node metadata backed by [`heed`] as its persistent storage engine.
///
/// Every [`put`](KeyValueStore::put) runs in its own write transaction and is durable once
/// committed.
#[derive(Debug, Clone)]
pub struct HeedMetadataStore {
    env: Env,
    db: Db,
}

impl HeedMetadataStore {
    /// Opens the metadata database, creating it if `env` does not have it yet.
    pub fn new(env: Env) -> heed::Result<Self> {
        let mut transaction = env.write_txn()?;
        let db: Db = env.create_database(&mut transaction, Some(DB))?;
        transaction.commit()?;

        Ok(Self { env, db })
    }
}

impl KeyValueStore for HeedMetadataStore {
    type Err = heed::Error;

    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, Self::Err> {
        let transaction = self.env.read_txn()?;

        let value = self.db.get(&transaction, key)?.map(<[u8]>::to_vec);

        transaction.commit()?;

        Ok(value)
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), Self::Err> {
        let mut transaction = self.env.write_txn()?;

        self.db.put(&mut transaction, key, value)?;

        transaction.commit()
    }
}
