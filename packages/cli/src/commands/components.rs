use crate::config::GeneratorConfig;
use crate::fs::write_over;
use anyhow::{Context, Result};
use canvas_typegen_codegen::{generate, render_document, TypeCatalog};
use canvas_typegen_schema::read_components_from_dir;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Args)]
pub struct ComponentsArgs {
    /// Path to components directory with yaml/json files (defaults to config)
    pub components_root_path: Option<PathBuf>,

    /// File path and name to write the TypeScript types to (defaults to config)
    pub types_output_file: Option<PathBuf>,

    /// Change the current working directory
    #[arg(long)]
    pub cwd: Option<PathBuf>,
}

pub fn components(args: ComponentsArgs, cwd: &Path) -> Result<()> {
    let cwd = resolve_cwd(cwd, args.cwd.as_deref())?;
    debug!("Using cwd {}", cwd.display());

    let config = GeneratorConfig::load(&cwd)?;
    let components_root = args
        .components_root_path
        .unwrap_or_else(|| config.components_root.clone());
    let types_output_file = args
        .types_output_file
        .unwrap_or_else(|| config.types_output_file.clone());

    println!("{}", "🔨 Generating component types...".bright_blue().bold());

    let count = generate_types_file(&cwd, &components_root, &types_output_file, &config.catalog)?;

    println!(
        "  {} Generated {} component types → {}",
        "✓".green(),
        count,
        types_output_file.display()
    );

    Ok(())
}

/// Absolute working directory: `dir` resolved against `base`, with `.` and
/// `..` segments and symlinks collapsed.
pub fn resolve_cwd(base: &Path, dir: Option<&Path>) -> Result<PathBuf> {
    let joined = match dir {
        Some(dir) => base.join(dir),
        None => base.to_path_buf(),
    };
    std::fs::canonicalize(&joined)
        .with_context(|| format!("Working directory {} does not exist", joined.display()))
}

/// Read, generate and write in one pass. Returns the number of components.
///
/// The output file is only touched once every component has been generated.
pub fn generate_types_file(
    cwd: &Path,
    components_root: &Path,
    types_output_file: &Path,
    catalog: &TypeCatalog,
) -> Result<usize> {
    let records = read_components_from_dir(&cwd.join(components_root))?;
    info!("Found {} components", records.len());

    let writer = generate(&records, catalog)?;
    let document = render_document(&components_root.display().to_string(), &writer);

    write_over(&cwd.join(types_output_file), &document)?;
    Ok(records.len())
}
