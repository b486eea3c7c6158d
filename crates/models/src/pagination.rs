use serde::Serialize;

/// A resolved page window for the course list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub const DEFAULT_PAGE: u64 = 1;
    pub const DEFAULT_LIMIT: u64 = 6;

    /// Builds a page window from raw query values.
    ///
    /// Each value is read as a leading integer, so `"3abc"` is 3 and `"2.9"` is 2.
    /// A page below 1 or that cannot be read becomes 1, and the same for limit becomes 6.
    pub fn from_params(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: Self::positive_or(page, Self::DEFAULT_PAGE),
            limit: Self::positive_or(limit, Self::DEFAULT_LIMIT),
        }
    }

    fn positive_or(raw: Option<&str>, default: u64) -> u64 {
        match raw.and_then(parse_leading_int) {
            Some(value) if value >= 1 => value as u64,
            _ => default,
        }
    }

    /// Number of rows to skip before this page, capped at `i64::MAX` so it stays a valid SQL offset
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .min(i64::MAX as u64)
    }

    /// Number of pages needed to show `total` rows
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }
}

/// Reads the integer prefix of a string: optional leading whitespace, an optional sign,
/// then one or more ASCII digits. Anything after the digits is ignored.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        let page = PageRequest::from_params(None, None);
        assert_eq!(page, PageRequest { page: 1, limit: 6 });
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_invalid_and_sub_one_values_fall_back() {
        assert_eq!(PageRequest::from_params(Some("0"), Some("0")), PageRequest::default());
        assert_eq!(PageRequest::from_params(Some("abc"), Some("")), PageRequest::default());
        assert_eq!(PageRequest::from_params(Some("-4"), Some("-1")), PageRequest::default());
    }

    #[test]
    fn test_leading_integer_prefix() {
        assert_eq!(PageRequest::from_params(Some("3abc"), Some(" 10")).page, 3);
        assert_eq!(PageRequest::from_params(Some("2.9"), None).page, 2);
        assert_eq!(PageRequest::from_params(None, Some("+12")).limit, 12);
        assert_eq!(PageRequest::from_params(Some("abc3"), None).page, 1);
    }

    #[test]
    fn test_overflowing_value_falls_back() {
        let page = PageRequest::from_params(Some("99999999999999999999999"), None);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_offset_of_huge_page_fits_sql_bigint() {
        let page = PageRequest::from_params(Some("9223372036854775807"), None);
        assert_eq!(page.page, i64::MAX as u64);
        assert_eq!(page.offset(), i64::MAX as u64);

        let page = PageRequest::from_params(Some("9223372036854775807"), Some("9223372036854775807"));
        assert_eq!(page.offset(), i64::MAX as u64);
    }

    #[test]
    fn test_offset_and_total_pages() {
        let page = PageRequest::from_params(Some("3"), Some("6"));
        assert_eq!(page.offset(), 12);
        assert_eq!(page.total_pages(13), 3);
        assert_eq!(page.total_pages(12), 2);
        assert_eq!(page.total_pages(0), 0);
    }
}
