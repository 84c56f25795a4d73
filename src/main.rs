use clap::Parser;
use miette::Result;
use pmap::cli::{Cli, Commands};
use pmap::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => pmap::cli::build::run(args, &printer)?,
        Commands::Check(args) => pmap::cli::check::run(args, &printer)?,
        Commands::Parse(args) => pmap::cli::parse::run(args)?,
        Commands::Init(args) => pmap::cli::init::run(args, &printer)?,
        Commands::Completions(args) => pmap::cli::completions::run(args)?,
    }

    Ok(())
}
