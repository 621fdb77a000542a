use {
    crate::{resolver::NonceResolver, store::KeyValueStore, wallet::Wallet},
    nonced_shared::primitives::{Address, B256, Signature},
    std::{
        collections::HashMap,
        io,
        sync::atomic::{AtomicUsize, Ordering},
    },
};

/// Resolves the nonces it was built with and counts how often it was asked.
#[derive(Debug, Default)]
pub struct FixedResolver {
    nonces: HashMap<Address, u64>,
    calls: AtomicUsize,
}

impl FixedResolver {
    pub fn new(nonces: impl IntoIterator<Item = (Address, u64)>) -> Self {
        Self {
            nonces: nonces.into_iter().collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl NonceResolver for FixedResolver {
    type Err = io::Error;

    fn get_nonce(&self, address: &Address) -> Result<u64, Self::Err> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.nonces.get(address).copied().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("unknown actor {address}"))
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FailingResolver;

impl NonceResolver for FailingResolver {
    type Err = io::Error;

    fn get_nonce(&self, _: &Address) -> Result<u64, Self::Err> {
        Err(io::Error::other("state tree unavailable"))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FailingWallet;

impl Wallet for FailingWallet {
    type Err = io::Error;

    fn sign(&self, _: &Address, _: B256) -> Result<Signature, Self::Err> {
        Err(io::Error::other("key store locked"))
    }
}

/// A store whose reads or writes always fail. A store that fails writes reads as empty.
#[derive(Debug, Clone, Copy)]
pub struct FailingStore {
    fail_reads: bool,
}

impl FailingStore {
    pub fn reads() -> Self {
        Self { fail_reads: true }
    }

    pub fn writes() -> Self {
        Self { fail_reads: false }
    }
}

impl KeyValueStore for FailingStore {
    type Err = io::Error;

    fn get(&self, _: &[u8]) -> Result<Option<Vec<u8>>, Self::Err> {
        if self.fail_reads {
            Err(io::Error::other("read failed"))
        } else {
            Ok(None)
        }
    }

    fn put(&self, _: &[u8], _: &[u8]) -> Result<(), Self::Err> {
        Err(io::Error::other("write failed"))
    }
}
