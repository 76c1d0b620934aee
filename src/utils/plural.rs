//! Pluralization utilities.

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 records)
/// - `plural_s(1)` -> `""` (1 record)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// - `plural_count(1, "record")` -> `"1 record"`
/// - `plural_count(177, "record")` -> `"177 records"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "image"), "0 images");
        assert_eq!(plural_count(1, "image"), "1 image");
        assert_eq!(plural_count(177, "record"), "177 records");
    }
}
