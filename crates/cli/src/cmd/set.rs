use color_eyre::eyre::{Result, bail};
use postmeta_core::MetadataUpdate;
use postmeta_core::clock::SystemClock;
use postmeta_core::frontmatter::parser::is_field_key;
use postmeta_core::frontmatter::serializer::serialize_fields;
use postmeta_core::posts::update_post;
use std::path::Path;

use super::{open_store, post_name, setup};
use crate::SetArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: SetArgs) -> Result<()> {
    let update = build_update(
        args.title,
        args.date,
        args.image,
        args.categories,
        args.tags,
        args.fields,
    );
    if update.is_empty() {
        bail!(
            "Nothing to update for {}: pass --title, --date, --image, --category, --tag or --field",
            args.file
        );
    }

    let rc = setup(config, profile)?;
    let mut store = open_store(&rc)?;
    let filename = post_name(&args.file);

    let record = update_post(&mut store, &filename, &update, &SystemClock)?;
    println!("Updated {filename}");
    print!("{}", serialize_fields(&record));
    Ok(())
}

fn build_update(
    title: Option<String>,
    date: Option<String>,
    image: Option<String>,
    categories: Vec<String>,
    tags: Vec<String>,
    fields: Vec<(String, String)>,
) -> MetadataUpdate {
    let mut update = MetadataUpdate { title, date, image, categories, tags, ..Default::default() };
    for (key, value) in fields {
        update.set_field(&key, &value);
    }
    update
}

/// Parse a `key=value` argument.
pub fn parse_field(s: &str) -> Result<(String, String), String> {
    let (key, value) =
        s.split_once('=').ok_or_else(|| format!("expected key=value, got '{s}'"))?;
    let key = key.trim();
    if !is_field_key(key) || key.contains(char::is_whitespace) {
        return Err(format!("invalid field name '{key}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
