pub use {
    error::{BoxedError, CorruptEntry, Error, NonceError, Result},
    in_memory::InMemoryStore,
    lock::{AccountGuard, AccountLocks},
    message::{Message, SignedMessage},
    resolver::NonceResolver,
    signer::MessageSigner,
    store::{KeyValueStore, Namespaced, NonceStore},
    wallet::{LocalWallet, Wallet, WalletError},
};

pub mod codec;
pub mod error;
mod in_memory;
mod lock;
mod message;
mod resolver;
mod signer;
mod store;
mod wallet;

#[cfg(any(feature = "test-doubles", test))]
pub mod test_doubles;
