mod cmd;
mod completions;
mod logging;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::engine::ArgValueCompleter;
use clap_complete::{CompleteEnv, Shell};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "postmeta", version, about = "Manage blog post frontmatter and the post index")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// Create a new post from a title
    New(NewArgs),

    /// Add comma-separated tags to a post
    AddTags(AddTagsArgs),

    /// Update metadata fields of a post
    Set(SetArgs),

    /// Print the metadata of a post
    Show(ShowArgs),

    /// Regenerate the JSON post index
    Index(IndexArgs),

    /// Print a shell completion script
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Post title; the filename is derived from it
    pub title: String,

    /// Publish date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Debug, Args)]
pub struct AddTagsArgs {
    /// Post filename (e.g. "my-post.md")
    #[arg(add = ArgValueCompleter::new(completions::complete_posts))]
    pub file: String,

    /// Tags to add, separated by commas
    pub tags: String,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Post filename (e.g. "my-post.md")
    #[arg(add = ArgValueCompleter::new(completions::complete_posts))]
    pub file: String,

    #[arg(long)]
    pub title: Option<String>,

    /// Date as YYYY-MM-DD or "Month DD, YYYY"
    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub image: Option<String>,

    /// Category to add (repeatable)
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Tag to add (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Any other field as key=value (repeatable)
    #[arg(long = "field", value_parser = cmd::set::parse_field)]
    pub fields: Vec<(String, String)>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Post filename (e.g. "my-post.md")
    #[arg(add = ArgValueCompleter::new(completions::complete_posts))]
    pub file: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct IndexArgs {
    /// Write the index here instead of the configured index_path
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Print each post as it is indexed
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    pub shell: Shell,
}

fn main() -> color_eyre::Result<()> {
    CompleteEnv::with_factory(Cli::command).complete();
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let profile = cli.profile.as_deref();

    let result = match cli.command {
        Commands::Doctor => cmd::doctor::run(config, profile),
        Commands::New(args) => cmd::new::run(config, profile, &args),
        Commands::AddTags(args) => cmd::tags::run(config, profile, &args),
        Commands::Set(args) => cmd::set::run(config, profile, args),
        Commands::Show(args) => cmd::show::run(config, profile, &args),
        Commands::Index(args) => cmd::index::run(config, profile, &args),
        Commands::Completions(args) => {
            cmd::completions::run(args.shell, &mut Cli::command());
            Ok(())
        }
    };

    logging::shutdown();
    result
}
