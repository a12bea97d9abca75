//! Main binary entry point for the `jsdupes` duplicate-function finder.
//!
//! This binary simply delegates to the shared `entry_point::run_with_args()`
//! function to ensure consistent behavior with the `jsdupes-cli` wrapper.

use anyhow::Result;

fn main() -> Result<()> {
    let code = jsdupes::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}
