use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bundle-rename")]
#[command(about = "Rename bundle roles from a CSV mapping; archive the originals as disabled.")]
pub(crate) struct Cli {
    /// Settings file (YAML). Falls back to $BUNDLE_RENAME_CONFIG.
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Debug logging (ignored when RUST_LOG is set).
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Apply a mapping CSV (`Original Role Name`, `New Role Name`) to a bundle tree.
    Run {
        /// Bundle root, searched recursively; receives the unresolved-roles report.
        #[arg(long)]
        bundle: PathBuf,

        /// Mapping CSV file.
        #[arg(long)]
        mapping: PathBuf,

        /// Archive directory (default: <bundle>/00_Disabled).
        #[arg(long)]
        archive: Option<PathBuf>,

        /// Report what would change without writing anything.
        #[arg(long)]
        dry_run: bool,

        /// Print the batch report as JSON on stdout.
        #[arg(long)]
        json: bool,
    },
    /// Print the canonical artifact file name for a role.
    Name {
        /// Role name as it appears in the mapping.
        role: String,
    },
}
