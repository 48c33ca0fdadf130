//! Line splitting of raw SDP text

/// A single non-empty logical line of a SDP message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'s> {
    /// 1-based position of the line inside the message
    pub number: usize,

    /// Content of the line with surrounding whitespace and line terminator removed
    pub text: &'s str,
}

/// Split `text` into its logical lines.
///
/// Accepts `\r\n` and bare `\n` line endings and a missing terminator after the last line.
/// Blank lines are skipped, their line numbers are not reused.
pub fn lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    text.split('\n')
        .enumerate()
        .map(|(index, text)| Line {
            number: index + 1,
            text: text.trim(),
        })
        .filter(|line| !line.text.is_empty())
}

#[cfg(test)]
mod test {
    use super::*;

    fn texts(input: &str) -> Vec<&str> {
        lines(input).map(|line| line.text).collect()
    }

    #[test]
    fn crlf() {
        assert_eq!(texts("v=0\r\ns=-\r\n"), ["v=0", "s=-"]);
    }

    #[test]
    fn bare_lf() {
        assert_eq!(texts("v=0\ns=-\n"), ["v=0", "s=-"]);
    }

    #[test]
    fn mixed_and_unterminated() {
        assert_eq!(texts("v=0\r\ns=-\nt=0 0"), ["v=0", "s=-", "t=0 0"]);
    }

    #[test]
    fn blank_lines_keep_numbering() {
        let lines: Vec<_> = lines("v=0\r\n\r\na=rtcp-mux\r\n").collect();

        assert_eq!(
            lines,
            [
                Line {
                    number: 1,
                    text: "v=0"
                },
                Line {
                    number: 3,
                    text: "a=rtcp-mux"
                }
            ]
        );
    }

    #[test]
    fn empty() {
        assert!(texts("").is_empty());
        assert!(texts("\r\n\r\n").is_empty());
    }
}
