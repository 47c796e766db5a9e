//! Macros for common CLI error handling patterns.

/// Write to a stream and exit with error code if writing fails.
///
/// # Examples
///
/// ```ignore
/// write_or_exit!(out, "Grand Prix");
/// ```
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}
