//! # Logging Module
//!
//! add-header talks to the user on three channels:
//! - `verbose_log!` traces each step of a run (config discovery, template
//!   loading, every file read and written) on stderr, only with `-v`
//! - `info_log!` reports run-level outcomes, such as the `--fail-on-fix`
//!   exit, on stdout unless `-q` is given
//! - `tracing` events (`debug!` per-file header state, `warn!` when a stale
//!   header has no detectable end) go through the subscriber set up by
//!   [`init_tracing`], filtered by `-v`/`-q` or `RUST_LOG`
//!
//! stdout stays limited to the run report, so `-q` output is a plain list of
//! modified paths.
//!
//! ## Example
//!
//! ```rust
//! use add_header::logging::{ColorMode, set_verbose};
//! use add_header::{info_log, verbose_log};
//!
//! set_verbose();
//! ColorMode::Never.apply();
//!
//! verbose_log!("Loading header template from: {}", "HEADER.txt");
//! info_log!("Header fixed in {} file(s)", 2);
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};
use owo_colors::{OwoColorize, Stream};

/// Prints to stderr when `-v` was given; a no-op otherwise.
///
/// Takes the same arguments as [`eprintln!`].
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Prints a highlighted run outcome to stdout; suppressed by `-q`.
///
/// Takes the same arguments as [`println!`].
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::emit_info(&format!($($arg)*));
        }
    };
}

/// Writes an [`info_log!`] line, yellow when colors are enabled.
#[doc(hidden)]
pub fn emit_info(message: &str) {
  println!("{}", message.if_supports_color(Stream::Stdout, |m| m.yellow()));
}
