//! Command line interface definition.

use clap::Parser;
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.jsdupes.toml):
  Create this file in your project root (or any ancestor of the scan path)
  to set defaults. Command-line flags always win over the file.

  [jsdupes]
  threshold = 70                    # Similarity threshold (0-100)
  exclude_folders = [\"vendor\"]      # Skipped in addition to node_modules,
                                    # .git, dist, build
  extensions = [\"js\", \"jsx\", \"ts\", \"tsx\", \"mjs\", \"cjs\"]
  fail_on_duplicates = false        # Exit 1 when any pair is reported
";

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "jsdupes - Find near-duplicate functions across JavaScript and TypeScript source trees",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    /// Directory (or single file) to scan.
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Minimum similarity percentage (0-100) for a pair to be reported.
    /// A score exactly equal to the threshold is reported.
    #[arg(short, long)]
    pub threshold: Option<u8>,

    /// Output the raw scan result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Folders to exclude from the scan, in addition to the defaults.
    #[arg(long, alias = "exclude-folder")]
    pub exclude_folders: Vec<String>,

    /// Print diagnostic details to stderr while scanning.
    #[arg(long)]
    pub verbose: bool,

    /// Exit with code 1 if any duplicate pair is found.
    /// For CI/CD integration.
    #[arg(long)]
    pub fail_on_duplicates: bool,

    /// Write an HTML report into the given directory.
    #[cfg(feature = "html_report")]
    #[arg(long, value_name = "DIR")]
    pub report: Option<PathBuf>,

    /// Open the generated HTML report in the default browser (with --report).
    #[cfg(feature = "html_report")]
    #[arg(long)]
    pub open: bool,
}
