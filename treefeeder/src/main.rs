use anyhow::{Context, Result}; // Use anyhow for easy error handling in the binary
use arboard::Clipboard;
use clap::Parser;
use log::{debug, error, info, LevelFilter};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use treefeeder_lib::feed_tree;

mod config_loader;

use config_loader::build_run_settings;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "List contents of directories in a tree-like format, followed by the contents of the listed files.",
    long_about = "Treefeeder walks a directory, prints it as a tree diagram with directory and file counts, and then appends the content of every listed file under a 'FilePath: <path>' header. Sections are separated by a separator token ([SEP] by default).\n\nHidden entries (names starting with '.') are skipped unless --all is given. Patterns are shell globs matched against bare file names."
)]
pub(crate) struct Cli {
    /// Directory to start listing.
    /// If not provided, the current working directory is used.
    #[arg(index = 1, value_name = "DIRECTORY")]
    target_path: Option<PathBuf>,

    /// List only those files that match the pattern. Can be used multiple times.
    /// Comma-separated lists are accepted (commas inside `[...]` do not split).
    /// Never applies to directories.
    /// Example: -P "*.rs" -P "*.toml"
    #[arg(short = 'P', long = "pattern", value_name = "PATTERN")]
    include_patterns: Vec<String>,

    /// Do not list files or directories that match the pattern. Can be used multiple times.
    /// Takes precedence over --pattern. Example: -I target -I "*.lock"
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    exclude_patterns: Vec<String>,

    /// Separator placed between the tree and each file section. Defaults to [SEP].
    #[arg(short = 'S', long)]
    separator: Option<String>,

    /// Include hidden files and directories (names starting with '.').
    #[arg(short = 'a', long = "all")]
    include_hidden: bool,

    /// Write output to a file instead of stdout.
    #[arg(short = 'o', long, conflicts_with = "clipboard")]
    output: Option<PathBuf>,

    /// Copy output to the system clipboard instead of stdout or a file.
    #[arg(short = 'c', long, conflicts_with = "output")]
    clipboard: bool,

    /// Additional config file applied after the global and local ones.
    #[arg(long = "config", value_name = "FILE")]
    config_path: Option<PathBuf>,

    /// Skip the global config, the local .treefeeder.toml and ignore files.
    #[arg(long)]
    no_config: bool,

    /// Enable verbose output. Use -v for info, -vv for debug, -vvv for trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[cfg(test)]
impl Cli {
    pub(crate) fn test_default() -> Self {
        Self {
            target_path: None,
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
            separator: None,
            include_hidden: false,
            output: None,
            clipboard: false,
            config_path: None,
            no_config: false,
            verbose: 0,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // --- Initialize Logging ---
    let log_level = match cli.verbose {
        0 => LevelFilter::Warn,  // Default: Show warnings and errors
        1 => LevelFilter::Info,  // -v: Show info, warnings, errors
        2 => LevelFilter::Debug, // -vv: Show debug, info, warnings, errors
        _ => LevelFilter::Trace, // -vvv and more: Show everything
    };

    env_logger::Builder::new().filter_level(log_level).init();

    info!("Log level set to: {}", log_level);
    debug!("Parsed arguments: {:?}", cli);

    // --- Determine Target Path ---
    let target_path = match cli.target_path.clone() {
        Some(path) => path,
        None => std::env::current_dir().context("Failed to get current working directory")?,
    };
    info!("Target path determined as: {:?}", target_path);

    // --- Merge config files and CLI flags ---
    let settings = build_run_settings(&cli, &target_path)?;

    // --- Call Library ---
    let output = match feed_tree(&settings.traversal, &settings.separator) {
        Ok(output) => output,
        Err(e) => {
            error!("Error during treefeeder operation: {}", e);
            return Err(e.into());
        }
    };

    // --- Handle Output ---
    if cli.clipboard {
        info!("Copying output to clipboard...");
        let mut clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        clipboard
            .set_text(output)
            .context("Failed to copy content to clipboard")?;
        info!("Successfully copied content to clipboard.");
    } else if let Some(output_path) = cli.output {
        info!("Writing output to file: {:?}", output_path);
        let mut file = File::create(&output_path)
            .with_context(|| format!("Failed to create output file: {:?}", output_path))?;
        file.write_all(output.as_bytes())
            .with_context(|| format!("Failed to write content to file: {:?}", output_path))?;
        info!("Successfully wrote content to {:?}", output_path);
    } else {
        debug!("Writing output to stdout...");
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(output.as_bytes())
            .context("Failed to write content to stdout")?;
        stdout.flush().context("Failed to flush stdout")?;
    }

    Ok(())
}
