//! Page window for `GET /products`

use std::num::IntErrorKind;

/// Largest page a single list call returns; also the fallback page size.
pub const MAX_COUNT: i64 = 10;

/// Offset/limit pair after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Rows to skip (>= 0)
    pub start: i64,
    /// Rows to return (1..=10)
    pub count: i64,
}

impl PageWindow {
    /// Create a window with clamping.
    ///
    /// - count outside 1..=10 becomes 10
    /// - negative start becomes 0
    pub fn new(start: i64, count: i64) -> Self {
        let count = if (1..=MAX_COUNT).contains(&count) {
            count
        } else {
            MAX_COUNT
        };

        Self {
            start: start.max(0),
            count,
        }
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        self.start
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.count
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(0, MAX_COUNT)
    }
}

/// Raw `count`/`start` query values, as sent.
#[derive(Debug, Clone, Default)]
pub struct PageParams {
    pub count: Option<String>,
    pub start: Option<String>,
}

impl PageParams {
    /// Pick `count` and `start` out of decoded query pairs.
    /// A repeated key keeps its first value.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        };

        Self {
            count: first("count"),
            start: first("start"),
        }
    }
}

/// Absent or unparseable values read as 0 before clamping. Integers too
/// large for i64 saturate at the bound in their direction.
fn parse_or_zero(value: Option<&str>) -> i64 {
    match value.map(str::parse::<i64>) {
        Some(Ok(n)) => n,
        Some(Err(e)) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 0,
        },
        None => 0,
    }
}

impl From<PageParams> for PageWindow {
    fn from(params: PageParams) -> Self {
        Self::new(
            parse_or_zero(params.start.as_deref()),
            parse_or_zero(params.count.as_deref()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn keeps_valid_window() {
        for count in 1..=10 {
            let w = PageWindow::new(3, count);
            assert_eq!(w.limit(), count);
            assert_eq!(w.offset(), 3);
        }
    }

    #[test]
    fn clamps_count() {
        assert_eq!(PageWindow::new(0, 0).count, 10);
        assert_eq!(PageWindow::new(0, -4).count, 10);
        assert_eq!(PageWindow::new(0, 11).count, 10);
        assert_eq!(PageWindow::new(0, i64::MAX).count, 10);
    }

    #[test]
    fn clamps_start() {
        assert_eq!(PageWindow::new(-1, 5).start, 0);
        assert_eq!(PageWindow::new(i64::MIN, 5).start, 0);
    }

    #[test]
    fn missing_params_use_defaults() {
        let w = PageWindow::from(PageParams::default());
        assert_eq!(w, PageWindow { start: 0, count: 10 });
        assert_eq!(w, PageWindow::default());
    }

    #[test]
    fn unparseable_params_read_as_zero() {
        let params = PageParams::from_pairs(&pairs(&[("count", "lots"), ("start", "2.5")]));
        assert_eq!(PageWindow::from(params), PageWindow { start: 0, count: 10 });
    }

    #[test]
    fn oversized_params_saturate() {
        let params = PageParams::from_pairs(&pairs(&[
            ("start", "99999999999999999999"),
            ("count", "99999999999999999999"),
        ]));
        assert_eq!(
            PageWindow::from(params),
            PageWindow { start: i64::MAX, count: 10 }
        );

        let params = PageParams::from_pairs(&pairs(&[("start", "-99999999999999999999")]));
        assert_eq!(PageWindow::from(params).start, 0);
    }

    #[test]
    fn first_value_wins() {
        let params = PageParams::from_pairs(&pairs(&[
            ("start", "4"),
            ("count", "2"),
            ("count", "9"),
            ("start", "1"),
        ]));
        assert_eq!(PageWindow::from(params), PageWindow { start: 4, count: 2 });
    }
}
