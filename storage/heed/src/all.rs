use {
    crate::metadata,
    heed::{Env, EnvOpenOptions},
    std::path::Path,
};

pub const DATABASES: [&str; 1] = [metadata::DB];

/// Opens the LMDB environment at `path`, creating the directory and every database in
/// [`DATABASES`] that does not exist yet.
pub fn open_env(path: impl AsRef<Path>, map_size: usize) -> heed::Result<Env> {
    let path = path.as_ref();

    std::fs::create_dir_all(path)?;

    // SAFETY: the environment is opened once per path for the lifetime of the process.
    let env = unsafe {
        EnvOpenOptions::new()
            .max_dbs(DATABASES.len() as u32)
            .map_size(map_size)
            .open(path)?
    };

    {
        let mut transaction = env.write_txn()?;

        let _: metadata::Db = env.create_database(&mut transaction, Some(metadata::DB))?;

        transaction.commit()?;
    }

    tracing::debug!(path = %path.display(), "Opened LMDB environment");

    Ok(env)
}
