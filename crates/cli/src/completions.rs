//! Dynamic value completers for shell completion.
//!
//! These read the user's configuration so that post arguments complete to
//! the filenames actually present in the posts directory.

use clap_complete::engine::CompletionCandidate;
use postmeta_core::config::loader::ConfigLoader;
use postmeta_core::config::types::ResolvedConfig;
use postmeta_core::store::{FsStore, PostStore};
use std::ffi::OsStr;
use std::path::Path;

/// Load the resolved config, returning None if it fails.
fn load_config() -> Option<ResolvedConfig> {
    ConfigLoader::load(None, None).ok()
}

/// Complete post filenames from the configured posts directory.
pub fn complete_posts(current: &OsStr) -> Vec<CompletionCandidate> {
    match load_config() {
        Some(cfg) => posts_matching(&cfg.posts_dir, current.to_str().unwrap_or("")),
        None => vec![],
    }
}

fn posts_matching(posts_dir: &Path, prefix: &str) -> Vec<CompletionCandidate> {
    let Ok(store) = FsStore::new(posts_dir) else {
        return vec![];
    };
    store
        .list_files("md")
        .unwrap_or_default()
        .into_iter()
        .filter(|name| name.starts_with(prefix))
        .map(CompletionCandidate::new)
        .collect()
}
