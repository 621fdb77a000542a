use {
    dashmap::DashMap,
    nonced_shared::primitives::Address,
    parking_lot::{Mutex, RawMutex, lock_api::ArcMutexGuard},
    std::sync::Arc,
};

/// Exclusive access to the nonce of one account. Released on drop.
pub type AccountGuard = ArcMutexGuard<RawMutex, ()>;

/// One mutex per account, created on first use and kept for the lifetime of the signer.
///
/// Callers for the same account are serialized; callers for different accounts never wait on
/// each other.
#[derive(Debug, Default)]
pub struct AccountLocks {
    locks: DashMap<Address, Arc<Mutex<()>>>,
}

impl AccountLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks until the calling thread holds the lock of `address`.
    pub fn acquire(&self, address: Address) -> AccountGuard {
        // The map shard must be released before blocking on the account mutex.
        let lock = self.locks.entry(address).or_default().clone();

        lock.lock_arc()
    }
}
