//! Shared utilities for argument processing.

/// What: Determine the log level from the command-line arguments.
///
/// Output:
/// - `"debug"` with `--verbose`, otherwise `--log-level`.
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}
