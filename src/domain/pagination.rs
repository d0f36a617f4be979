//! Cursor-based windowing over an ordered reference collection.
//!
//! The cursor is an element of the collection itself. A window starts at the
//! cursor (inclusive) and the returned `next_start` is the first element not
//! included in the window, so chaining `next_start` into the next call walks
//! the collection without gaps or overlap.

use std::num::IntErrorKind;

use thiserror::Error;

/// Structural pagination failures, raised before any entity is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("Limit must be a natural number greater than 0.")]
    InvalidLimit,

    #[error("Cannot find startWith `{0}` in the collection.")]
    MissingStartCursor(String),
}

/// One page of references plus the cursor of the following page.
#[derive(Debug, PartialEq, Eq)]
pub struct Window<'a, T> {
    pub items: &'a [T],
    pub next_start: Option<&'a T>,
}

/// Parses a raw `limit` query value.
///
/// `None` means "no limit". Zero, negative and non-numeric values are rejected.
/// Positive values too large for `usize` are clamped to `usize::MAX`, which
/// covers any collection.
pub fn parse_limit(raw: Option<&str>) -> Result<Option<usize>, PaginationError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let limit = match raw.parse::<usize>() {
        Ok(limit) => limit,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => usize::MAX,
        Err(_) => return Err(PaginationError::InvalidLimit),
    };

    validate_limit(Some(limit))?;
    Ok(Some(limit))
}

/// Rejects a zero limit.
pub fn validate_limit(limit: Option<usize>) -> Result<(), PaginationError> {
    match limit {
        Some(0) => Err(PaginationError::InvalidLimit),
        _ => Ok(()),
    }
}

/// Returns the window of `collection` starting at `start_with`.
///
/// Without `start_with` the window starts at the first element; without
/// `limit` it runs to the end of the collection.
///
/// # Errors
///
/// - [`PaginationError::InvalidLimit`] if `limit` is zero
/// - [`PaginationError::MissingStartCursor`] if `start_with` is not in `collection`
pub fn paginate<'a, T: AsRef<str>>(
    collection: &'a [T],
    limit: Option<usize>,
    start_with: Option<&str>,
) -> Result<Window<'a, T>, PaginationError> {
    validate_limit(limit)?;

    let start = match start_with {
        Some(cursor) => collection
            .iter()
            .position(|item| item.as_ref() == cursor)
            .ok_or_else(|| PaginationError::MissingStartCursor(cursor.to_string()))?,
        None => 0,
    };

    let end = match limit {
        Some(limit) => start.saturating_add(limit).min(collection.len()),
        None => collection.len(),
    };

    Ok(Window {
        items: &collection[start..end],
        next_start: collection.get(end),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs() -> Vec<String> {
        ["A", "B", "C", "D", "E"].map(String::from).to_vec()
    }

    #[test]
    fn test_first_window() {
        let collection = refs();
        let window = paginate(&collection, Some(2), None).unwrap();
        assert_eq!(window.items, &collection[0..2]);
        assert_eq!(window.next_start.map(String::as_str), Some("C"));
    }

    #[test]
    fn test_window_starts_at_cursor() {
        let collection = refs();
        let window = paginate(&collection, Some(2), Some("C")).unwrap();
        assert_eq!(window.items, &collection[2..4]);
        assert_eq!(window.next_start.map(String::as_str), Some("E"));
    }

    #[test]
    fn test_window_reaching_end_has_no_next() {
        let collection = refs();
        let window = paginate(&collection, Some(10), Some("D")).unwrap();
        assert_eq!(window.items, &collection[3..]);
        assert!(window.next_start.is_none());

        let exact = paginate(&collection, Some(5), None).unwrap();
        assert_eq!(exact.items.len(), 5);
        assert!(exact.next_start.is_none());
    }

    #[test]
    fn test_no_limit_returns_remaining_collection() {
        let collection = refs();
        let window = paginate(&collection, None, Some("B")).unwrap();
        assert_eq!(window.items, &collection[1..]);
        assert!(window.next_start.is_none());
    }

    #[test]
    fn test_missing_cursor() {
        let collection = refs();
        assert_eq!(
            paginate(&collection, Some(2), Some("Z")),
            Err(PaginationError::MissingStartCursor("Z".to_string()))
        );
    }

    #[test]
    fn test_zero_limit_rejected() {
        let collection = refs();
        assert_eq!(
            paginate(&collection, Some(0), None),
            Err(PaginationError::InvalidLimit)
        );
    }

    #[test]
    fn test_empty_collection() {
        let collection: Vec<String> = vec![];
        let window = paginate(&collection, Some(3), None).unwrap();
        assert!(window.items.is_empty());
        assert!(window.next_start.is_none());
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit(None), Ok(None));
        assert_eq!(parse_limit(Some("3")), Ok(Some(3)));
        assert_eq!(parse_limit(Some("0")), Err(PaginationError::InvalidLimit));
        assert_eq!(parse_limit(Some("-1")), Err(PaginationError::InvalidLimit));
        assert_eq!(parse_limit(Some("abc")), Err(PaginationError::InvalidLimit));
        assert_eq!(parse_limit(Some("1.5")), Err(PaginationError::InvalidLimit));
        assert_eq!(parse_limit(Some("")), Err(PaginationError::InvalidLimit));
    }

    #[test]
    fn test_parse_limit_clamps_overflow() {
        assert_eq!(
            parse_limit(Some("99999999999999999999")),
            Ok(Some(usize::MAX))
        );
        assert_eq!(
            parse_limit(Some("-99999999999999999999")),
            Err(PaginationError::InvalidLimit)
        );
    }

    #[test]
    fn test_huge_limit_window() {
        let collection = refs();
        let window = paginate(&collection, Some(usize::MAX), Some("B")).unwrap();
        assert_eq!(window.items, &collection[1..]);
        assert!(window.next_start.is_none());
    }
}
