// crates/status_report/src/lib.rs

//! Console conventions shared by the repository tools: errors go to stderr
//! prefixed with `[-]`, status messages go to stdout prefixed with `[*]`.

use std::io::{self, Write};

/// Exit code used for every fatal error (seen by the shell as 255).
pub const FAILURE_EXIT_CODE: i32 = -1;

/// Formats an error message.
pub fn error_line(text: &str) -> String {
    format!("[-] {}", text)
}

/// Formats a status message.
pub fn status_line(text: &str) -> String {
    format!("[*] {}", text)
}

/// Prints `text` to stderr as an error line. Empty text prints nothing.
pub fn print_error(text: &str) {
    if text.is_empty() {
        return;
    }
    eprintln!("{}", error_line(text));
    let _ = io::stderr().flush();
}

/// Prints `text` to stdout as a status line, but only when `verbose` is set.
pub fn print_status(text: &str, verbose: bool) {
    if !verbose || text.is_empty() {
        return;
    }
    println!("{}", status_line(text));
    let _ = io::stdout().flush();
}

/// Prints `text` as an error line and terminates the process.
pub fn die(text: &str) -> ! {
    print_error(text);
    log::debug!("exiting with code {}", FAILURE_EXIT_CODE);
    std::process::exit(FAILURE_EXIT_CODE)
}

/// Installs the process-wide logger.
///
/// The default level is `debug` in verbose mode and `warn` otherwise;
/// `RUST_LOG` takes precedence when set. Calling this more than once is
/// harmless.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}
