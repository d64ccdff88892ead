pub mod completions;
pub mod doctor;
pub mod index;
pub mod new;
pub mod set;
pub mod show;
pub mod tags;

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr, eyre};
use postmeta_core::config::loader::ConfigLoader;
use postmeta_core::config::types::ResolvedConfig;
use postmeta_core::store::FsStore;

use crate::logging;

/// Load configuration and start logging. Shared by every command that
/// touches posts.
pub fn setup(config: Option<&Path>, profile: Option<&str>) -> Result<ResolvedConfig> {
    let rc = ConfigLoader::load(config, profile).map_err(|e| {
        eyre!("Configuration error: {e}\nRun 'postmeta doctor' to diagnose.")
    })?;
    logging::init(&rc)?;
    Ok(rc)
}

pub fn open_store(rc: &ResolvedConfig) -> Result<FsStore> {
    FsStore::new(&rc.posts_dir)
        .wrap_err_with(|| format!("Cannot open posts directory {}", rc.posts_dir.display()))
}

/// Posts are addressed by filename; accept a path and keep its last
/// component so that `posts/foo.md` works as well as `foo.md`.
pub fn post_name(file: &str) -> String {
    Path::new(file)
        .file_name()
        .map_or_else(|| file.to_string(), |name| name.to_string_lossy().into_owned())
}
