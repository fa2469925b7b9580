//! Invariant checks shared by the entity constructors.

/// Character an email address must contain to be accepted.
pub const EMAIL_MARKER: char = '@';

/// Minimum user age unless a [`crate::domain::UserPolicy`] says otherwise.
pub const DEFAULT_MIN_USER_AGE: i32 = 13;

/// Strictly greater than zero. NaN is not positive.
pub fn is_positive(value: f64) -> bool {
    value > 0.0
}

/// True when every value is strictly positive.
pub fn all_positive(values: &[f64]) -> bool {
    values.iter().copied().all(is_positive)
}

/// Structural email check: only the presence of [`EMAIL_MARKER`] is required.
pub fn looks_like_email(email: &str) -> bool {
    email.contains(EMAIL_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1.0, true)]
    #[case(f64::MIN_POSITIVE, true)]
    #[case(0.0, false)]
    #[case(-0.0, false)]
    #[case(-3.5, false)]
    #[case(f64::NAN, false)]
    fn test_is_positive(#[case] value: f64, #[case] expected: bool) {
        assert_eq!(is_positive(value), expected);
    }

    #[test]
    fn test_all_positive() {
        assert!(all_positive(&[75.0, 120.0, 60.0]));
        assert!(!all_positive(&[75.0, 0.0, 60.0]));
        assert!(all_positive(&[]));
    }

    #[rstest]
    #[case("a@b.com", true)]
    #[case("@", true)]
    #[case("no-at-sign", false)]
    #[case("", false)]
    fn test_looks_like_email(#[case] email: &str, #[case] expected: bool) {
        assert_eq!(looks_like_email(email), expected);
    }
}
