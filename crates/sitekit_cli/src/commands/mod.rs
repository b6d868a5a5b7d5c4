//! CLI command definitions.

use clap::{Parser, Subcommand};

pub mod init;
pub mod list;

/// sitekit - initialize new site workspaces from site templates
#[derive(Parser)]
#[command(name = "sitekit")]
#[command(version, about = "Initialize new site workspaces from site templates")]
#[command(long_about = r#"
sitekit materializes a named site template into an empty directory, then
layers the template's declared feature templates on top in order.

COMMANDS:
  init    → Initialize a site workspace from a template
  list    → List available site templates

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Template error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new site workspace from a template
    Init(init::InitArgs),

    /// List available site templates
    List(list::ListArgs),
}
