use color_eyre::eyre::Result;
use postmeta_core::config::loader::{ConfigLoader, default_config_path};
use std::path::Path;

use crate::logging;

pub fn run(config: Option<&Path>, profile: Option<&str>) -> Result<()> {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            logging::init(&rc)?;
            println!("OK   postmeta doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("site_root: {}", rc.site_root.display());
            println!("posts_dir: {}{}", rc.posts_dir.display(), missing(&rc.posts_dir));
            println!("index_path: {}", rc.index_path.display());
            println!("logging.level: {}", rc.logging.level);
            if let Some(ref file) = rc.logging.file {
                println!("logging.file: {}", file.display());
            }
            tracing::debug!("doctor finished for profile {}", rc.active_profile);
            Ok(())
        }
        Err(e) => {
            println!("FAIL postmeta doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

fn missing(path: &Path) -> &'static str {
    if path.is_dir() { "" } else { " (missing)" }
}
