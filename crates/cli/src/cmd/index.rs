//! Index command implementation.

use color_eyre::eyre::Result;
use postmeta_core::index::{ProgressCallback, SortMode};
use postmeta_core::posts::generate_index;
use std::path::Path;

use super::{open_store, setup};
use crate::IndexArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &IndexArgs) -> Result<()> {
    let rc = setup(config, profile)?;
    let store = open_store(&rc)?;
    let output = args.output.as_deref().unwrap_or(&rc.index_path);

    let progress: Option<ProgressCallback> = if args.verbose {
        println!("Indexing posts: {}", rc.posts_dir.display());
        Some(Box::new(|current, total, name| {
            println!("[{current}/{total}] {name}");
        }))
    } else {
        None
    };

    let stats = generate_index(&store, output, progress)?;

    println!("Generated index with {} posts", stats.posts_indexed);
    if stats.sort_mode == SortMode::Lexicographic {
        println!("  Some dates are not in 'Month DD, YYYY' form; sorted as text");
    }
    if args.verbose {
        println!("  Duration:       {}ms", stats.duration_ms);
    }
    println!("Index stored at: {}", output.display());
    Ok(())
}
