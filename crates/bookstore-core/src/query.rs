//! # Listing Queries
//!
//! Filters and ordering for `get`.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        List Pipeline                                    │
//! │                                                                         │
//! │  All books (ordered by id)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  title contains?  ──► author contains?  ──► year == date?              │
//! │  (case-insensitive)   (case-insensitive)    (date only)                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Stable sort by SortKey (title | author | date | count), if given      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Render                                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::types::Book;
use crate::validation::{normalize_filter, parse_date, substring_filter, ValidationResult};

// =============================================================================
// Sort Key
// =============================================================================

/// Field to order a listing by. Ordering is always ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Author,
    Date,
    Count,
}

impl SortKey {
    /// All keys, in the order they are advertised.
    pub const ALL: [SortKey; 4] = [SortKey::Title, SortKey::Author, SortKey::Date, SortKey::Count];

    pub const fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Author => "author",
            SortKey::Date => "date",
            SortKey::Count => "count",
        }
    }

    /// Compares two books by this key.
    ///
    /// Titles and authors compare by byte order, so uppercase sorts before
    /// lowercase.
    pub fn compare(&self, a: &Book, b: &Book) -> Ordering {
        match self {
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Author => a.author.cmp(&b.author),
            SortKey::Date => a.year.cmp(&b.year),
            SortKey::Count => a.count.cmp(&b.count),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse; anything outside [`SortKey::ALL`] is rejected.
impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "order-by".to_string(),
                value: s.to_string(),
                allowed: SortKey::ALL.iter().map(|k| k.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Filter
// =============================================================================

/// Predicates a book must satisfy to be listed. All present predicates must
/// hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Lowercased title substring.
    pub title: Option<String>,

    /// Lowercased author substring.
    pub author: Option<String>,

    /// Exact publication date.
    pub date: Option<NaiveDate>,
}

impl BookFilter {
    pub fn matches(&self, book: &Book) -> bool {
        contains_ignore_case(&book.title, self.title.as_deref())
            && contains_ignore_case(&book.author, self.author.as_deref())
            && self.date.map_or(true, |date| book.year == date)
    }
}

fn contains_ignore_case(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) => haystack.to_lowercase().contains(needle),
        None => true,
    }
}

// =============================================================================
// List Query
// =============================================================================

/// A validated `get` request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub filter: BookFilter,
    pub order_by: Option<SortKey>,
}

impl ListQuery {
    /// Builds a query from raw flag values.
    ///
    /// The date is validated before the sort key, so a request with both a
    /// bad date and a bad key reports the date.
    ///
    /// ## Errors
    /// * `ValidationError::InvalidFormat` - `date` is not `yyyy-MM-dd`
    /// * `ValidationError::NotAllowed` - `order_by` is not a known key
    pub fn parse(
        title: Option<&str>,
        author: Option<&str>,
        date: Option<&str>,
        order_by: Option<&str>,
    ) -> ValidationResult<Self> {
        let date = normalize_filter(date)
            .map(|raw| parse_date(&raw))
            .transpose()?;

        let order_by = normalize_filter(order_by)
            .map(|raw| raw.parse::<SortKey>())
            .transpose()?;

        Ok(ListQuery {
            filter: BookFilter {
                title: substring_filter(title).map(|t| t.to_lowercase()),
                author: substring_filter(author).map(|a| a.to_lowercase()),
                date,
            },
            order_by,
        })
    }

    /// Filters then orders `books`. Sorting is stable, so equal keys keep the
    /// input order.
    pub fn apply(&self, books: Vec<Book>) -> Vec<Book> {
        let mut matched: Vec<Book> = books
            .into_iter()
            .filter(|book| self.filter.matches(book))
            .collect();

        if let Some(key) = self.order_by {
            matched.sort_by(|a, b| key.compare(a, b));
        }

        matched
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i64, title: &str, author: &str, ymd: (i32, u32, u32), count: i64) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            year: NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap(),
            count,
        }
    }

    fn shelf() -> Vec<Book> {
        vec![
            book(1, "Book 1", "Author 1", (2020, 1, 1), 10),
            book(2, "Book 2", "Author 2", (2021, 5, 10), 5),
            book(3, "Atlas", "Zed", (2019, 3, 3), 7),
        ]
    }

    fn ids(books: &[Book]) -> Vec<i64> {
        books.iter().map(|b| b.id).collect()
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("title".parse::<SortKey>(), Ok(SortKey::Title));
        assert_eq!("COUNT".parse::<SortKey>(), Ok(SortKey::Count));
        assert_eq!(" Date ".parse::<SortKey>(), Ok(SortKey::Date));
        assert!(matches!(
            "bogus".parse::<SortKey>(),
            Err(ValidationError::NotAllowed { .. })
        ));
    }

    #[test]
    fn test_title_filter_ignores_case() {
        let query = ListQuery::parse(Some("BOOK"), None, None, None).unwrap();
        assert_eq!(ids(&query.apply(shelf())), vec![1, 2]);
    }

    #[test]
    fn test_title_and_author_both_required() {
        let query = ListQuery::parse(Some("book"), Some("author 2"), None, None).unwrap();
        assert_eq!(ids(&query.apply(shelf())), vec![2]);

        let query = ListQuery::parse(Some("atlas"), Some("author"), None, None).unwrap();
        assert!(query.apply(shelf()).is_empty());
    }

    #[test]
    fn test_date_filter_exact() {
        let query = ListQuery::parse(None, None, Some("2020-01-01"), None).unwrap();
        assert_eq!(ids(&query.apply(shelf())), vec![1]);
    }

    #[test]
    fn test_invalid_date_rejected() {
        let err = ListQuery::parse(None, None, Some("2020/01/01"), Some("bogus")).unwrap_err();
        assert_eq!(err.field(), "date");
    }

    #[test]
    fn test_invalid_order_rejected() {
        let err = ListQuery::parse(None, None, None, Some("bogus")).unwrap_err();
        assert_eq!(err.field(), "order-by");
    }

    #[test]
    fn test_ordering() {
        let by = |key: &str| {
            let query = ListQuery::parse(None, None, None, Some(key)).unwrap();
            ids(&query.apply(shelf()))
        };

        assert_eq!(by("title"), vec![3, 1, 2]);
        assert_eq!(by("author"), vec![1, 2, 3]);
        assert_eq!(by("date"), vec![3, 1, 2]);
        assert_eq!(by("count"), vec![2, 3, 1]);
    }

    #[test]
    fn test_filter_whitespace_is_part_of_needle() {
        let query = ListQuery::parse(Some(" 2"), None, None, None).unwrap();
        let books = vec![
            book(1, "X2", "Author 1", (2020, 1, 1), 1),
            book(2, "Book 2", "Author 2", (2021, 5, 10), 1),
        ];
        assert_eq!(ids(&query.apply(books)), vec![2]);

        let query = ListQuery::parse(None, Some("Author "), None, None).unwrap();
        let books = vec![book(3, "Atlas", "Author", (2019, 3, 3), 1)];
        assert!(query.apply(books).is_empty());
    }

    #[test]
    fn test_title_sort_is_byte_order() {
        let books = vec![
            book(1, "atlas", "A", (2020, 1, 1), 1),
            book(2, "Book", "B", (2020, 1, 1), 1),
        ];
        let query = ListQuery::parse(None, None, None, Some("title")).unwrap();
        assert_eq!(ids(&query.apply(books)), vec![2, 1]);
    }

    #[test]
    fn test_empty_values_mean_no_filter() {
        let query = ListQuery::parse(Some(""), Some(""), Some(""), Some("")).unwrap();
        assert_eq!(query, ListQuery::default());
        assert_eq!(query.apply(shelf()).len(), 3);
    }
}
