//! Static exclusion filter for captured build output.
//!
//! Two fixed substrings mark the known-noisy lines: the toolchain install
//! path MSVC echoes for every tool it invokes, and the C4514 note printed
//! once per removed inline function. Lines are kept or dropped whole;
//! nothing is rewritten and nothing is reordered.

/// Path prefix of the installed toolchain; banner lines echo it.
pub const TOOLCHAIN_PATH: &str = r"C:\Program Files";

/// Text of the MSVC C4514 note.
pub const INLINE_REMOVAL_NOTE: &str = "unreferenced inline function has been removed";

/// Split captured stdout into lines and drop every line containing one of
/// the exclusion substrings. Survivors keep their original order and exact
/// content. Pure function of the input text.
pub fn apply(stdout: &str) -> Vec<&str> {
    stdout.lines().filter(|line| !is_excluded(line)).collect()
}

fn is_excluded(line: &str) -> bool {
    line.contains(TOOLCHAIN_PATH) || line.contains(INLINE_REMOVAL_NOTE)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    // --- exclusion rules ---

    #[test]
    fn toolchain_path_line_is_dropped() {
        let stdout = "Line1\nC:\\Program Files\\cl.exe warning\nLine2\n";
        assert_eq!(apply(stdout), vec!["Line1", "Line2"]);
    }

    #[test]
    fn inline_removal_note_is_dropped() {
        let stdout = "main.cpp\nnote: unreferenced inline function has been removed\nlink ok";
        assert_eq!(apply(stdout), vec!["main.cpp", "link ok"]);
    }

    #[test]
    fn substring_matches_anywhere_in_line() {
        let stdout = "prefix C:\\Program Files suffix\nkept";
        assert_eq!(apply(stdout), vec!["kept"]);
    }

    #[test]
    fn unrelated_lines_pass_through() {
        let stdout = "warning C4100: 'argc': unreferenced formal parameter";
        assert_eq!(apply(stdout), vec![stdout]);
    }

    // --- structural properties ---

    #[test]
    fn empty_input_yields_no_lines() {
        assert!(apply("").is_empty());
    }

    #[test]
    fn trailing_newline_does_not_add_an_empty_line() {
        assert_eq!(apply("only\n"), vec!["only"]);
    }

    #[test]
    fn order_and_content_are_preserved() {
        let stdout = "  indented\t\nsecond | pipe\nC:\\Program Files\\link.exe\nthird";
        assert_eq!(apply(stdout), vec!["  indented\t", "second | pipe", "third"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let stdout = "a\nC:\\Program Files\\cl.exe\nb\nnote: unreferenced inline function has been removed\nc";
        let once = apply(stdout).join("\n");
        assert_eq!(apply(&once), apply(stdout));
    }

    #[test]
    fn blank_lines_survive() {
        let stdout = "a\n\nb";
        assert_eq!(apply(stdout), vec!["a", "", "b"]);
    }
}
