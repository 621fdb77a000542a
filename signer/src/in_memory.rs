use {
    crate::store::KeyValueStore,
    parking_lot::RwLock,
    std::{collections::BTreeMap, convert::Infallible},
};

/// A [`KeyValueStore`] that lives for as long as the process does.
///
/// Share it behind an [`Arc`](std::sync::Arc) to hand the same entries to a new signer, which is
/// how tests model a process restart.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for InMemoryStore {
    type Err = Infallible;

    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, Self::Err> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), Self::Err> {
        self.entries.write().insert(key.to_vec(), value.to_vec());
        Ok(())
    }
}
