use {
    super::shared::prepare_db_dir,
    crate::config::Config,
    anyhow::Context,
    nonced_storage_heed::{HeedMetadataStore, open_env},
};

pub type SharedStorage = HeedMetadataStore;

pub fn storage(config: &Config) -> anyhow::Result<SharedStorage> {
    prepare_db_dir(config)?;

    let env = open_env(&config.db_path, config.map_size).with_context(|| {
        format!("LMDB environment {} should open", config.db_path.display())
    })?;

    Ok(HeedMetadataStore::new(env)?)
}
