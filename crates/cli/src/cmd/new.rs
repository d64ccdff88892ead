use color_eyre::eyre::{Result, WrapErr};
use postmeta_core::clock::SystemClock;
use postmeta_core::posts::create_post;
use std::path::Path;

use super::{open_store, setup};
use crate::NewArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &NewArgs) -> Result<()> {
    let rc = setup(config, profile)?;

    std::fs::create_dir_all(&rc.posts_dir)
        .wrap_err_with(|| format!("Cannot create {}", rc.posts_dir.display()))?;
    let mut store = open_store(&rc)?;

    let filename = create_post(&mut store, &args.title, args.date.as_deref(), &SystemClock)?;
    println!("Created new post: {}", store.path_of(&filename).display());
    Ok(())
}
