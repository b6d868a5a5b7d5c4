//! List command - List available site templates.

use anyhow::Result;
use clap::Args;

use sitekit_templates::TemplateRegistry;

#[derive(Args)]
pub struct ListArgs {
    /// Emit the listing as JSON
    #[arg(long)]
    json: bool,

    /// Include hidden templates
    #[arg(long)]
    all: bool,
}

pub fn execute(args: ListArgs) -> Result<()> {
    let registry = TemplateRegistry::builtin();
    let templates = if args.all {
        registry.list_all()
    } else {
        registry.list_visible()
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&templates)?);
        return Ok(());
    }

    println!("Available site templates:");
    println!();
    for template in &templates {
        println!("   {:<20}- {}", template.name, template.description);
    }

    Ok(())
}
