use crate::{AnalysisError, ErrorKind, PatternSource};

#[test]
fn test_peek_does_not_advance() {
    let source = PatternSource::new("ab");
    let cursor = source.cursor();
    assert_eq!(cursor.peek(0), Some('a'));
    assert_eq!(cursor.peek(1), Some('b'));
    assert_eq!(cursor.peek(2), None);
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_consume_advances_by_one() {
    let source = PatternSource::new("ab");
    let (c, cursor) = source.cursor().consume().unwrap();
    assert_eq!(c, 'a');
    assert_eq!(cursor.position(), 1);
    let (c, cursor) = cursor.consume().unwrap();
    assert_eq!(c, 'b');
    assert!(cursor.at_end());
}

#[test]
fn test_consume_at_end() {
    let source = PatternSource::new("a");
    let cursor = source.cursor().advance(1);
    assert_eq!(
        cursor.consume().unwrap_err(),
        AnalysisError::new(ErrorKind::UnexpectedEndOfInput, 1)
    );
}

#[test]
fn test_expect() {
    let source = PatternSource::new("<x");
    let cursor = source.cursor().expect('<').unwrap();
    assert_eq!(cursor.position(), 1);
    assert_eq!(
        cursor.expect('>').unwrap_err(),
        AnalysisError::new(
            ErrorKind::ExpectedCharacter {
                expected: '>',
                found: Some('x')
            },
            1
        )
    );
    assert_eq!(
        cursor.advance(1).expect('>').unwrap_err().kind,
        ErrorKind::ExpectedCharacter {
            expected: '>',
            found: None
        }
    );
}

#[test]
fn test_checkpoint_is_a_copy() {
    let source = PatternSource::new("(?<=a)");
    let checkpoint = source.cursor().advance(2);
    let moved = checkpoint.eat('<').and_then(|c| c.eat('='));
    assert_eq!(moved.map(|c| c.position()), Some(4));
    assert_eq!(checkpoint.position(), 2);
    assert_eq!(checkpoint.peek(0), Some('<'));
}

#[test]
fn test_advance_is_clamped() {
    let source = PatternSource::new("abc");
    assert_eq!(source.cursor().advance(10).position(), 3);
}

#[test]
fn test_positions_count_characters() {
    let source = PatternSource::new("é€x");
    assert_eq!(source.len(), 3);
    let cursor = source.cursor().advance(2);
    assert_eq!(cursor.peek(0), Some('x'));
}

#[test]
fn test_take_while() {
    let source = PatternSource::new("name>rest");
    let (name, cursor) = source.cursor().take_while(|c| c.is_alphanumeric());
    assert_eq!(name, "name");
    assert_eq!(cursor.peek(0), Some('>'));
}

#[test]
fn test_skip_trivia_in_free_spacing() {
    let source = PatternSource::new("  # note\n\t x");
    let cursor = source.cursor().skip_trivia(true);
    assert_eq!(cursor.peek(0), Some('x'));
    assert_eq!(source.cursor().skip_trivia(false).position(), 0);
}

#[test]
fn test_skip_trivia_comment_to_end() {
    let source = PatternSource::new("a # trailing");
    let cursor = source.cursor().advance(1).skip_trivia(true);
    assert!(cursor.at_end());
}

#[test]
fn test_slice_out_of_range_is_empty() {
    let source = PatternSource::new("abc");
    assert_eq!(source.slice(crate::Span::new(1, 3)), "bc");
    assert_eq!(source.slice(crate::Span::new(2, 1)), "");
    assert_eq!(source.slice(crate::Span::new(2, 9)), "");
}
