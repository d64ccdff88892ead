use color_eyre::eyre::Result;
use postmeta_core::frontmatter::serializer::serialize_fields;
use postmeta_core::posts::show_post;
use serde::Serialize;
use std::path::Path;

use super::{open_store, post_name, setup};
use crate::ShowArgs;

#[derive(Debug, Serialize)]
struct ShowOutput<'a> {
    filename: &'a str,
    #[serde(flatten)]
    record: &'a postmeta_core::MetadataRecord,
    body_lines: usize,
}

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &ShowArgs) -> Result<()> {
    let rc = setup(config, profile)?;
    let store = open_store(&rc)?;
    let filename = post_name(&args.file);

    let (record, body) = show_post(&store, &filename)?;
    if args.json {
        let output = ShowOutput {
            filename: &filename,
            record: &record,
            body_lines: body.lines().count(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if record.is_empty() {
        println!("(no metadata in {filename})");
    } else {
        print!("{}", serialize_fields(&record));
    }
    Ok(())
}
