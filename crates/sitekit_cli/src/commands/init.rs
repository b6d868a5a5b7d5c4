//! Init command - Initialize a site workspace from a template.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use sitekit_templates::{TemplateRegistry, TemplateResolver};

#[derive(Args)]
pub struct InitArgs {
    /// Template to initialize from (omit to see available templates)
    template: Option<String>,

    /// Destination directory (defaults to the current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Directory holding loose template trees (development form)
    #[arg(long, default_value = "templates")]
    templates_dir: PathBuf,
}

pub fn execute(args: InitArgs) -> Result<()> {
    let registry = TemplateRegistry::builtin();

    let Some(template) = args.template else {
        print_available(&registry);
        return Ok(());
    };

    let dest = match args.path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    fs::create_dir_all(&dest)
        .with_context(|| format!("Failed to create destination directory {:?}", dest))?;

    info!("Initializing '{}' at {:?}", template, dest);

    let resolver = TemplateResolver::new(registry, args.templates_dir);
    resolver
        .initialize(&template, &dest)
        .with_context(|| format!("Failed to initialize template '{}'", template))?;

    println!("✅ Site initialized from template '{}'!", template);
    println!();
    println!("Location: {:?}", dest);
    println!();
    println!("Next steps:");
    println!("  cd {}", dest.display());
    println!("  # Edit site.yaml and start writing");

    Ok(())
}

fn print_available(registry: &TemplateRegistry) {
    println!("Available site templates:");
    println!();
    for template in registry.list_visible() {
        println!("   {:<20}- {}", template.name, template.description);
    }
    println!();
    println!("For example, create a simple site with a blog and no theme:");
    println!();
    println!("   sitekit init simple_blog");
}
