use {crate::config::Config, anyhow::Context, std::fs};

pub(super) fn prepare_db_dir(config: &Config) -> anyhow::Result<()> {
    let path = &config.db_path;

    if config.reset_db && fs::exists(path)? {
        tracing::warn!(path = %path.display(), "Removing database directory");
        fs::remove_dir_all(path)
            .with_context(|| format!("Database directory {} should be removable", path.display()))?;
    }

    Ok(())
}
