//! Page slicing for list endpoints.
//!
//! Lists are materialized in full, formatted, and only then sliced to the
//! requested page. Counts reported alongside a page always refer to the full
//! list.

/// Number of items on one page of a list response.
pub const ITEMS_PER_PAGE: usize = 10;

/// Page served when the client does not ask for one.
pub const DEFAULT_PAGE: i64 = 1;

/// Return the items belonging to 1-based `page`.
///
/// Pages past the end and pages below 1 yield an empty list rather than an
/// error.
///
/// # Examples
///
/// ```
/// use casting_core::pagination::paginate;
///
/// let items: Vec<u32> = (1..=25).collect();
/// assert_eq!(paginate(items.clone(), 3), vec![21, 22, 23, 24, 25]);
/// assert!(paginate(items, 4).is_empty());
/// ```
pub fn paginate<T>(items: Vec<T>, page: i64) -> Vec<T> {
    let Some(start) = page_start(page) else {
        return Vec::new();
    };
    items.into_iter().skip(start).take(ITEMS_PER_PAGE).collect()
}

/// Parse a raw `page` query value.
///
/// Missing or non-numeric values fall back to [`DEFAULT_PAGE`].
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_PAGE)
}

fn page_start(page: i64) -> Option<usize> {
    if page < 1 {
        return None;
    }
    let index = usize::try_from(page - 1).ok()?;
    index.checked_mul(ITEMS_PER_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: u32) -> Vec<u32> {
        (1..=n).collect()
    }

    #[test]
    fn first_page_holds_first_ten() {
        assert_eq!(paginate(numbers(25), 1), numbers(10));
    }

    #[test]
    fn last_page_is_partial() {
        assert_eq!(paginate(numbers(12), 2), vec![11, 12]);
    }

    #[test]
    fn page_past_end_is_empty() {
        assert!(paginate(numbers(12), 3).is_empty());
    }

    #[test]
    fn zero_and_negative_pages_are_empty() {
        assert!(paginate(numbers(12), 0).is_empty());
        assert!(paginate(numbers(12), -4).is_empty());
    }

    #[test]
    fn huge_page_does_not_overflow() {
        assert!(paginate(numbers(3), i64::MAX).is_empty());
    }

    #[test]
    fn empty_list_yields_empty_page() {
        assert!(paginate(Vec::<u32>::new(), 1).is_empty());
    }

    #[test]
    fn parse_page_defaults_to_one() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("")), 1);
    }

    #[test]
    fn parse_page_accepts_integers() {
        assert_eq!(parse_page(Some("3")), 3);
        assert_eq!(parse_page(Some(" 2 ")), 2);
        assert_eq!(parse_page(Some("-1")), -1);
    }
}
