//! Print the OpenAPI document as JSON.

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use contact_intake::doc::ApiDoc;
use utoipa::OpenApi;

/// `openapi-dump` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "openapi-dump",
    about = "Print the contact intake OpenAPI document",
    version
)]
struct CliArgs {
    /// Emit compact JSON instead of pretty-printed output.
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = CliArgs::parse();
    let doc = ApiDoc::openapi();
    let json = if args.compact {
        doc.to_json()
    } else {
        doc.to_pretty_json()
    }
    .wrap_err("failed to serialise OpenAPI document")?;
    println!("{json}");
    Ok(())
}
