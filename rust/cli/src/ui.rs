//! UI helper functions for terminal output formatting.
//!
//! Consistent prefixes for errors and warnings written to the error stream.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Startup notice that pairings come from the built-in placeholder engine.
pub fn warn_placeholder_pairing(err: &mut dyn Write) -> std::io::Result<()> {
    display_warning(
        err,
        "Pairings use a simple placeholder (adjacent players in seed or standings order).",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_prefix() {
        let mut buf = Vec::new();
        write_error(&mut buf, "No match exists with that match number").unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Error: No match exists with that match number\n"
        );
    }

    #[test]
    fn test_placeholder_warning() {
        let mut buf = Vec::new();
        warn_placeholder_pairing(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("WARNING:"));
        assert!(text.contains("placeholder"));
    }
}
