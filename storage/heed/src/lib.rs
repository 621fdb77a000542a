pub use {
    all::{DATABASES, open_env},
    heed::{self, Env},
    metadata::HeedMetadataStore,
};

mod all;
pub mod metadata;
