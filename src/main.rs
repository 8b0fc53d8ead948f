//! Command line entry point for the page tree and manifest utilities.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use html_bundle_prep::config::ProjectConfig;
use html_bundle_prep::manifest::sync_manifest_assets;
use html_bundle_prep::project::ProjectLayout;
use html_bundle_prep::scan::{
    build_root_page_tree, find_html_files, find_pages_with_index, write_html_list,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project root the page tree and manifest are resolved against.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Explicit configuration file, overriding discovery in the project root.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every directory under the page tree that contains an index page.
    Pages,
    /// Write a nested JSON map of directories that lead to an index page.
    Tree {
        /// Destination file; `-` prints to stdout instead.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List every `.html` file under the page tree.
    Html {
        /// Destination file for the listing; defaults to the configured list file.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Merge files discovered under the page tree into the manifest asset list.
    Sync {
        /// Manifest file to edit; defaults to the configured manifest path.
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let project_root = cli
        .root
        .canonicalize()
        .with_context(|| format!("failed to resolve project root {}", cli.root.display()))?;

    let config = match &cli.config {
        Some(path) => ProjectConfig::from_path(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => ProjectConfig::discover(&project_root),
    };
    let layout = config.into_layout();

    match cli.command {
        Command::Pages => run_pages(&project_root, &layout),
        Command::Tree { output } => run_tree(&project_root, &layout, output),
        Command::Html { output } => run_html(&project_root, &layout, output),
        Command::Sync { manifest } => run_sync(&project_root, &layout, manifest),
    }
}

fn run_pages(project_root: &Path, layout: &ProjectLayout) -> Result<()> {
    let pages_root = layout.pages_dir_path(project_root);
    let records = find_pages_with_index(&pages_root, &layout.index_html_file)?;

    if records.is_empty() {
        println!(
            "No folders containing '{}' were found under {}.",
            layout.index_html_file,
            pages_root.display()
        );
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

fn run_tree(project_root: &Path, layout: &ProjectLayout, output: Option<PathBuf>) -> Result<()> {
    let pages_root = layout.pages_dir_path(project_root);
    if !pages_root.is_dir() {
        bail!(
            "page tree root {} not found or is not a directory",
            pages_root.display()
        );
    }

    let map = build_root_page_tree(&pages_root, &layout.pages_dir, &layout.index_html_file);
    let json = serde_json::to_string_pretty(&map)?;

    match output {
        Some(path) if path == Path::new("-") => println!("{json}"),
        other => {
            let destination = other.unwrap_or_else(|| layout.page_map_path(project_root));
            std::fs::write(&destination, format!("{json}\n"))
                .with_context(|| format!("failed to write {}", destination.display()))?;
            println!("Wrote folder map to {}", destination.display());
        }
    }
    Ok(())
}

fn run_html(project_root: &Path, layout: &ProjectLayout, output: Option<PathBuf>) -> Result<()> {
    let pages_root = layout.pages_dir_path(project_root);
    let files = find_html_files(&pages_root);

    if files.is_empty() {
        println!("No .html files found under {}.", pages_root.display());
        return Ok(());
    }

    for file in &files {
        println!("{}", file.display());
    }

    let destination = output.unwrap_or_else(|| layout.html_list_path(project_root));
    write_html_list(&files, &destination)?;
    println!("List of {} files saved to {}", files.len(), destination.display());
    Ok(())
}

fn run_sync(project_root: &Path, layout: &ProjectLayout, manifest: Option<PathBuf>) -> Result<()> {
    let manifest_path = manifest.unwrap_or_else(|| layout.manifest_path(project_root));
    let pages_root = layout.pages_dir_path(project_root);

    let report = sync_manifest_assets(project_root, &manifest_path, &pages_root)?;

    if report.candidates == 0 {
        println!("No files found under {}.", pages_root.display());
        return Ok(());
    }

    if report.changed {
        println!("Updated {}.", manifest_path.display());
    } else {
        println!("No new assets to add to {}.", manifest_path.display());
    }
    println!(
        "Summary: added {} new asset paths, {} were already listed.",
        report.added, report.already_present
    );
    Ok(())
}
