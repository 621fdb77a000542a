use {
    nonced_signer::{MessageSigner, NonceResolver, Wallet},
    std::sync::Arc,
};

pub use {config::Config, dependency::SharedStorage};

pub mod config;
pub mod dependency;

/// A [`MessageSigner`] backed by the storage engine selected at compile time.
pub type Signer<R, W> = MessageSigner<SharedStorage, R, W>;

/// Opens the configured storage and builds a signer that can be shared between tasks.
pub fn create_signer<R, W>(
    config: &Config,
    wallet: W,
    resolver: R,
) -> anyhow::Result<Arc<Signer<R, W>>>
where
    R: NonceResolver,
    W: Wallet,
{
    let storage = dependency::storage(config)?;

    tracing::info!(db_path = %config.db_path.display(), "Message signer ready");

    Ok(Arc::new(MessageSigner::new(wallet, resolver, storage)))
}
