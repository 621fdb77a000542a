use {nonced_storage_heed::open_env, std::path::Path};

pub const MAP_SIZE: usize = 10 * 1024 * 1024;

pub fn create_env(path: &Path) -> nonced_storage_heed::Env {
    open_env(path, MAP_SIZE).expect("Environment should open in tmpdir")
}
