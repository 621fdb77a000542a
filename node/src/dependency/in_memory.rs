use {crate::config::Config, nonced_signer::InMemoryStore, std::sync::Arc};

pub type SharedStorage = Arc<InMemoryStore>;

pub fn storage(_: &Config) -> anyhow::Result<SharedStorage> {
    tracing::warn!("Nonces are kept in memory and will be lost on restart");

    Ok(Arc::new(InMemoryStore::new()))
}
