use {
    alloy::signers::{SignerSync, local::PrivateKeySigner},
    nonced_shared::primitives::{Address, B256, Signature},
    std::{collections::HashMap, error::Error},
    thiserror::Error,
};

/// The key store that produces signatures on behalf of an account.
///
/// How and where keys are kept is up to the implementation; the signer only ever asks for a
/// signature over a 32 byte digest.
pub trait Wallet {
    type Err: Error + Send + Sync + 'static;

    fn sign(&self, address: &Address, digest: B256) -> Result<Signature, Self::Err>;
}

impl<W: Wallet + ?Sized> Wallet for &W {
    type Err = W::Err;

    fn sign(&self, address: &Address, digest: B256) -> Result<Signature, Self::Err> {
        (**self).sign(address, digest)
    }
}

impl<W: Wallet + ?Sized> Wallet for std::sync::Arc<W> {
    type Err = W::Err;

    fn sign(&self, address: &Address, digest: B256) -> Result<Signature, Self::Err> {
        (**self).sign(address, digest)
    }
}

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("no key for account {0}")]
    UnknownAccount(Address),
    #[error("{0}")]
    Signer(#[from] alloy::signers::Error),
}

/// A [`Wallet`] holding secp256k1 keys in process memory.
#[derive(Debug, Default, Clone)]
pub struct LocalWallet {
    keys: HashMap<Address, PrivateKeySigner>,
}

impl LocalWallet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key` and returns the address it signs for.
    pub fn insert(&mut self, key: PrivateKeySigner) -> Address {
        let address = key.address();
        self.keys.insert(address, key);
        address
    }
}

impl FromIterator<PrivateKeySigner> for LocalWallet {
    fn from_iter<T: IntoIterator<Item = PrivateKeySigner>>(iter: T) -> Self {
        let mut wallet = Self::new();
        iter.into_iter().for_each(|key| {
            wallet.insert(key);
        });
        wallet
    }
}

impl Wallet for LocalWallet {
    type Err = WalletError;

    fn sign(&self, address: &Address, digest: B256) -> Result<Signature, Self::Err> {
        let key = self
            .keys
            .get(address)
            .ok_or(WalletError::UnknownAccount(*address))?;

        Ok(key.sign_hash_sync(&digest)?)
    }
}
