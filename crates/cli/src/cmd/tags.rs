use color_eyre::eyre::Result;
use postmeta_core::clock::SystemClock;
use postmeta_core::posts::add_tags;
use std::path::Path;

use super::{open_store, post_name, setup};
use crate::AddTagsArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &AddTagsArgs) -> Result<()> {
    let rc = setup(config, profile)?;
    let mut store = open_store(&rc)?;
    let filename = post_name(&args.file);

    let record = add_tags(&mut store, &filename, &args.tags, &SystemClock)?;
    println!("Updated tags for {filename}");
    println!("Tags: {}", record.tags.join(", "));
    Ok(())
}
