//! SourceStream tests - reading, pushback, whitespace, line seeking

use crate::frontend::core::source::{SourceError, SourceStream};
use crate::util::span::Position;
use std::io::Write;

fn stream(text: &str) -> SourceStream {
    SourceStream::from_source("test.rat", text)
}

#[cfg(test)]
mod read_tests {
    use super::*;

    #[test]
    fn test_read_advances_column() {
        let mut src = stream("ab");
        assert_eq!(src.position(), Position::new(1, 1));
        assert_eq!(src.read_char(), Some('a'));
        assert_eq!(src.col_num(), 2);
        assert_eq!(src.read_char(), Some('b'));
        assert_eq!(src.col_num(), 3);
        assert_eq!(src.read_char(), None);
        assert_eq!(src.peek_char(), None);
    }

    #[test]
    fn test_newline_moves_to_next_line() {
        let mut src = stream("a\nb");
        src.read_char();
        assert_eq!(src.read_char(), Some('\n'));
        assert_eq!(src.line_num(), 2);
        assert_eq!(src.col_num(), 1);
        assert_eq!(src.read_char(), Some('b'));
        assert_eq!(src.position(), Position::new(2, 2));
    }

    #[test]
    fn test_peek_does_not_move() {
        let mut src = stream("xy");
        assert_eq!(src.peek_char(), Some('x'));
        assert_eq!(src.peek_char(), Some('x'));
        assert_eq!(src.position(), Position::new(1, 1));
        src.read_char();
        assert_eq!(src.peek_char(), Some('y'));
    }

    #[test]
    fn test_empty_source() {
        let mut src = stream("");
        assert_eq!(src.peek_char(), None);
        assert_eq!(src.read_char(), None);
        assert_eq!(src.line_count(), 0);
    }
}

#[cfg(test)]
mod reverse_tests {
    use super::*;

    #[test]
    fn test_reverse_restores_position() {
        let mut src = stream("ab");
        src.read_char();
        let before = src.position();
        assert_eq!(src.read_char(), Some('b'));
        src.reverse().unwrap();
        assert_eq!(src.position(), before);
        assert_eq!(src.read_char(), Some('b'));
    }

    #[test]
    fn test_reverse_across_newline() {
        let mut src = stream("a\nb");
        src.read_char();
        let before = src.position();
        src.read_char();
        assert_eq!(src.line_num(), 2);
        src.reverse().unwrap();
        assert_eq!(src.line_num(), before.line);
        assert_eq!(src.col_num(), before.column);
        assert_eq!(src.peek_char(), Some('\n'));
    }

    #[test]
    fn test_double_reverse_fails() {
        let mut src = stream("abc");
        src.read_char();
        src.read_char();
        src.reverse().unwrap();
        let err = src.reverse().unwrap_err();
        assert!(matches!(
            err,
            SourceError::InvalidReverse { position } if position == Position::new(1, 2)
        ));
    }

    #[test]
    fn test_reverse_before_any_read_fails() {
        let mut src = stream("abc");
        assert!(matches!(
            src.reverse(),
            Err(SourceError::InvalidReverse { .. })
        ));
    }

    #[test]
    fn test_reverse_after_eof_read_fails() {
        let mut src = stream("a");
        src.read_char();
        assert_eq!(src.read_char(), None);
        assert!(src.reverse().is_err());
    }

    #[test]
    fn test_reverse_allowed_again_after_read() {
        let mut src = stream("abc");
        src.read_char();
        src.reverse().unwrap();
        src.read_char();
        src.reverse().unwrap();
        assert_eq!(src.position(), Position::new(1, 1));
    }
}

#[cfg(test)]
mod whitespace_tests {
    use super::*;

    #[test]
    fn test_no_whitespace_is_noop() {
        let mut src = stream("x");
        assert!(!src.advance_whitespace());
        assert_eq!(src.peek_char(), Some('x'));
    }

    #[test]
    fn test_spaces_without_newline() {
        let mut src = stream("   \tx");
        assert!(!src.advance_whitespace());
        assert_eq!(src.peek_char(), Some('x'));
        assert_eq!(src.col_num(), 5);
    }

    #[test]
    fn test_newline_is_reported() {
        let mut src = stream("  \n\n  y");
        assert!(src.advance_whitespace());
        assert_eq!(src.peek_char(), Some('y'));
        assert_eq!(src.position(), Position::new(3, 3));
    }

    #[test]
    fn test_trailing_newline_at_eof_is_reported() {
        let mut src = stream("\n");
        assert!(src.advance_whitespace());
        assert_eq!(src.peek_char(), None);
    }

    #[test]
    fn test_last_whitespace_can_be_reversed() {
        let mut src = stream(" \nz");
        src.advance_whitespace();
        src.reverse().unwrap();
        assert_eq!(src.peek_char(), Some('\n'));
    }
}

#[cfg(test)]
mod seek_tests {
    use super::*;

    #[test]
    fn test_seek_and_read_line() {
        let mut src = stream("first\nsecond\nthird");
        src.seek_line(2).unwrap();
        assert_eq!(src.position(), Position::new(2, 1));
        assert_eq!(src.read_line(), "second");
        assert_eq!(src.read_line(), "third");
        assert_eq!(src.read_line(), "");
    }

    #[test]
    fn test_seek_after_reading_past_line() {
        let mut src = stream("a\nb\nc");
        while src.read_char().is_some() {}
        src.seek_line(1).unwrap();
        assert_eq!(src.read_line(), "a");
    }

    #[test]
    fn test_seek_out_of_bounds() {
        let mut src = stream("a\nb\n");
        assert_eq!(src.line_count(), 2);
        let err = src.seek_line(3).unwrap_err();
        assert!(matches!(
            err,
            SourceError::LineOutOfBounds {
                requested: 3,
                available: 2
            }
        ));
        assert!(src.seek_line(0).is_err());
    }

    #[test]
    fn test_seek_clears_pushback() {
        let mut src = stream("ab\ncd");
        src.read_char();
        src.seek_line(2).unwrap();
        assert!(src.reverse().is_err());
    }

    #[test]
    fn test_read_line_strips_carriage_return() {
        let mut src = stream("one\r\ntwo");
        assert_eq!(src.read_line(), "one");
        assert_eq!(src.read_line(), "two");
    }
}

#[cfg(test)]
mod open_tests {
    use super::*;

    #[test]
    fn test_wrong_extension_rejected_before_read() {
        // The path does not exist; the extension check must fire first.
        let err = SourceStream::open("/no/such/dir/program.txt").unwrap_err();
        assert!(matches!(err, SourceError::InvalidExtension { .. }));
    }

    #[test]
    fn test_missing_extension_rejected() {
        let err = SourceStream::open("program").unwrap_err();
        assert!(matches!(err, SourceError::InvalidExtension { .. }));
    }

    #[test]
    fn test_missing_file_is_open_failed() {
        let err = SourceStream::open("/no/such/dir/program.rat").unwrap_err();
        assert!(matches!(err, SourceError::OpenFailed { .. }));
    }

    #[test]
    fn test_open_reads_file() {
        let mut file = tempfile::Builder::new().suffix(".rat").tempfile().unwrap();
        write!(file, "let x = 1\n").unwrap();
        let mut src = SourceStream::open(file.path()).unwrap();
        assert_eq!(src.read_line(), "let x = 1");
        assert!(src.name().ends_with(".rat"));
    }
}
