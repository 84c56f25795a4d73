pub mod build;
pub mod check;
pub mod completions;
pub mod init;
pub mod parse;

use clap::{Parser, Subcommand};

/// pmap - plain-text document parser and renderer
#[derive(Parser, Debug)]
#[command(name = "pmap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render .pmap documents to HTML or JSON
    Build(build::BuildArgs),

    /// Lint .pmap documents without rendering
    Check(check::CheckArgs),

    /// Print a parsed document as JSON
    Parse(parse::ParseArgs),

    /// Initialize a pmap project (generates pmap.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
