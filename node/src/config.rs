use {
    anyhow::Context,
    std::{
        env, fs,
        path::{Path, PathBuf},
    },
};

pub const DB_PATH_VAR: &str = "NONCED_DB_PATH";
pub const MAP_SIZE_VAR: &str = "NONCED_MAP_SIZE";
pub const RESET_DB_VAR: &str = "NONCED_RESET_DB";

const DEFAULT_DB_PATH: &str = "db";
const DEFAULT_MAP_SIZE: usize = 1024 * 1024 * 1024; // 1 GiB

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Directory of the persistent store. Unused by the in-memory backend.
    pub db_path: PathBuf,
    /// Upper bound of the LMDB memory map in bytes.
    pub map_size: usize,
    /// Removes `db_path` before opening it. Every persisted nonce is lost.
    pub reset_db: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            map_size: DEFAULT_MAP_SIZE,
            reset_db: false,
        }
    }
}

impl Config {
    /// Reads a JSON encoded config. Missing fields take their default value.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = fs::File::open(path)
            .with_context(|| format!("Config file {} should be readable", path.display()))?;

        serde_json::from_reader(file)
            .with_context(|| format!("Config file {} should be JSON encoded", path.display()))
    }

    /// Overrides the defaults with environment variables, loading `.env` first if present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::default().with_overrides(|name| env::var(name).ok())
    }

    fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        if let Some(path) = var(DB_PATH_VAR) {
            self.db_path = PathBuf::from(path);
        }
        if let Some(size) = var(MAP_SIZE_VAR) {
            self.map_size = size
                .parse()
                .with_context(|| format!("{MAP_SIZE_VAR} should be a number of bytes"))?;
        }
        if let Some(reset) = var(RESET_DB_VAR) {
            self.reset_db = reset
                .parse()
                .with_context(|| format!("{RESET_DB_VAR} should be true or false"))?;
        }

        Ok(self)
    }
}
