use clap::Parser;
use gha_provenance::{
    cli::{self, GenerateArgs},
    error::Result,
};

/// Generate SLSA build provenance for the artifacts of a GitHub Actions workflow
#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(flatten)]
    args: GenerateArgs,
}

fn main() -> Result<()> {
    // Initialize logging
    gha_provenance::init_logging()?;

    // Parse command line arguments
    let cli = Cli::parse();

    let result = cli::handle_generate_command(cli.args);

    // Format and display any errors
    if let Err(ref e) = result {
        eprintln!("{}", cli::format_error(e));
    }

    result
}
