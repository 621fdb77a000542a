use {nonced_shared::primitives::Address, std::error::Error};

/// Supplies the nonce of an account that the nonce store has never seen.
///
/// Before nonces were persisted per account they were derived from the on-chain actor state, so
/// the value returned here is the next nonce not yet consumed on chain. It is trusted exactly once
/// per account, the first time that account signs.
pub trait NonceResolver {
    type Err: Error + Send + Sync + 'static;

    fn get_nonce(&self, address: &Address) -> Result<u64, Self::Err>;
}

impl<R: NonceResolver + ?Sized> NonceResolver for &R {
    type Err = R::Err;

    fn get_nonce(&self, address: &Address) -> Result<u64, Self::Err> {
        (**self).get_nonce(address)
    }
}

impl<R: NonceResolver + ?Sized> NonceResolver for std::sync::Arc<R> {
    type Err = R::Err;

    fn get_nonce(&self, address: &Address) -> Result<u64, Self::Err> {
        (**self).get_nonce(address)
    }
}
