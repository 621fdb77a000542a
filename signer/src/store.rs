use {
    crate::{
        codec,
        error::{BoxedError, NonceError},
    },
    nonced_shared::primitives::{Address, ToAccountKey},
    std::{error::Error, sync::Arc},
};

/// Private key namespace of the nonce store within shared node metadata.
pub const NAMESPACE: &str = "/message-signer";
/// Key segment grouping the last-assigned nonce of every account.
pub const ACTOR_NONCE_KEY: &str = "ActorNonce";

/// An ordered, durable byte-key to byte-value store.
///
/// This trait is defined by these operations:
/// * [`get`]: Reads the value stored under a key. A missing key is `Ok(None)`, never an error.
/// * [`put`]: Overwrites the value stored under a key. It must be durable once it returns.
///
/// Both operations take `&self` so that one store can be shared by concurrent callers.
///
/// [`get`]: Self::get
/// [`put`]: Self::put
pub trait KeyValueStore {
    type Err: Error + Send + Sync + 'static;

    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, Self::Err>;

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), Self::Err>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    type Err = S::Err;

    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, Self::Err> {
        (**self).get(key)
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), Self::Err> {
        (**self).put(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    type Err = S::Err;

    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, Self::Err> {
        (**self).get(key)
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), Self::Err> {
        (**self).put(key, value)
    }
}

/// Wraps a [`KeyValueStore`] so that every key lives under `prefix`.
#[derive(Debug, Clone)]
pub struct Namespaced<S> {
    prefix: Vec<u8>,
    inner: S,
}

impl<S> Namespaced<S> {
    pub fn new(prefix: impl Into<Vec<u8>>, inner: S) -> Self {
        Self {
            prefix: prefix.into(),
            inner,
        }
    }

    fn key(&self, key: &[u8]) -> Vec<u8> {
        let mut namespaced = Vec::with_capacity(self.prefix.len() + key.len());
        namespaced.extend_from_slice(&self.prefix);
        namespaced.extend_from_slice(key);
        namespaced
    }
}

impl<S: KeyValueStore> KeyValueStore for Namespaced<S> {
    type Err = S::Err;

    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, Self::Err> {
        self.inner.get(&self.key(key))
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), Self::Err> {
        self.inner.put(&self.key(key), value)
    }
}

/// Persists the last-assigned nonce of every account.
///
/// Values are encoded with [`codec::encode_unsigned`] under
/// `/message-signer/ActorNonce/<address>`.
#[derive(Debug, Clone)]
pub struct NonceStore<S> {
    store: Namespaced<S>,
}

impl<S: KeyValueStore> NonceStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Namespaced::new(NAMESPACE, store),
        }
    }

    /// Returns the last nonce handed out for `address`, or `None` if the account was never seen.
    pub fn get(&self, address: &Address) -> Result<Option<u64>, NonceError> {
        let bytes = self
            .store
            .get(&Self::key(address))
            .map_err(|e| NonceError::StoreRead(BoxedError::from(e)))?;

        bytes
            .map(|bytes| codec::decode_unsigned(&bytes))
            .transpose()
            .map_err(NonceError::from)
    }

    pub fn put(&self, address: &Address, nonce: u64) -> Result<(), NonceError> {
        let value =
            codec::encode_unsigned(nonce).map_err(|e| NonceError::StoreWrite(BoxedError::from(e)))?;

        self.store
            .put(&Self::key(address), &value)
            .map_err(|e| NonceError::StoreWrite(BoxedError::from(e)))
    }

    pub fn key(address: &Address) -> Vec<u8> {
        format!("/{ACTOR_NONCE_KEY}/{}", address.to_account_key()).into_bytes()
    }
}
