//! Position unit tests

use crate::util::span::Position;

#[test]
fn test_position_creation() {
    let pos = Position::new(1, 5);
    assert_eq!(pos.line, 1);
    assert_eq!(pos.column, 5);
}

#[test]
fn test_position_start_is_default() {
    assert_eq!(Position::start(), Position::new(1, 1));
    assert_eq!(Position::default(), Position::start());
}

#[test]
fn test_position_display() {
    let pos = Position::new(10, 20);
    assert_eq!(format!("{}", pos), "10:20");
}

#[test]
fn test_position_ordering() {
    assert!(Position::new(1, 9) < Position::new(2, 1));
    assert!(Position::new(3, 2) < Position::new(3, 4));
}
