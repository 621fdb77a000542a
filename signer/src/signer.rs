use {
    crate::{
        error::{BoxedError, Error, NonceError, Result},
        lock::AccountLocks,
        message::{Message, SignedMessage},
        resolver::NonceResolver,
        store::{KeyValueStore, NonceStore},
        wallet::Wallet,
    },
    nonced_shared::primitives::Address,
    tracing::{debug, error, info, warn},
};

/// Stamps every message with the next nonce of its sender and signs it.
///
/// Nonces are persisted per account before signing, so a nonce can be skipped when signing fails
/// but is never handed out twice, including across restarts that reopen the same store.
#[derive(Debug)]
pub struct MessageSigner<S, R, W> {
    wallet: W,
    resolver: R,
    store: NonceStore<S>,
    locks: AccountLocks,
}

impl<S, R, W> MessageSigner<S, R, W>
where
    S: KeyValueStore,
    R: NonceResolver,
    W: Wallet,
{
    pub fn new(wallet: W, resolver: R, store: S) -> Self {
        Self {
            wallet,
            resolver,
            store: NonceStore::new(store),
            locks: AccountLocks::new(),
        }
    }

    /// Assigns the next nonce of `message.from` to the message and signs it.
    ///
    /// If this fails with [`Error::Signing`] the nonce is already spent; see
    /// [`Error::nonce_spent`].
    pub fn sign_message(&self, mut message: Message) -> Result<SignedMessage> {
        let nonce = self.next_nonce(message.from)?;

        message.nonce = nonce;

        let signature = self
            .wallet
            .sign(&message.from, message.digest())
            .map_err(|e| {
                warn!(address = %message.from, nonce, "Nonce spent without a signature: {e}");
                Error::Signing {
                    nonce,
                    source: BoxedError::from(e),
                }
            })?;

        Ok(SignedMessage::new(message, signature))
    }

    /// The last nonce handed out for `address`, if any.
    pub fn stored_nonce(&self, address: &Address) -> std::result::Result<Option<u64>, NonceError> {
        self.store.get(address)
    }

    /// Reserves the next nonce of `address` and persists it before returning.
    ///
    /// The stored value is the last nonce handed out, so it is incremented. The bootstrap value is
    /// the next nonce not yet used on chain, so it is taken as is.
    fn next_nonce(&self, address: Address) -> std::result::Result<u64, NonceError> {
        let _guard = self.locks.acquire(address);

        let nonce = match self.store.get(&address) {
            Ok(Some(last)) => last
                .checked_add(1)
                .ok_or(NonceError::Exhausted(address))?,
            Ok(None) => {
                let nonce = self
                    .resolver
                    .get_nonce(&address)
                    .map_err(|e| NonceError::Bootstrap(BoxedError::from(e)))?;
                info!(%address, nonce, "Bootstrapped account nonce");
                nonce
            }
            Err(e @ NonceError::CorruptEntry(_)) => {
                error!(%address, "Stored nonce is corrupt: {e}");
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        self.store.put(&address, nonce)?;

        debug!(%address, nonce, "Assigned nonce");

        Ok(nonce)
    }
}
