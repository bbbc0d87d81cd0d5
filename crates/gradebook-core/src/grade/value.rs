use crate::config::bounds::{MAX_GRADE, MIN_GRADE};
use crate::error::{Error, Result};

/// Check that a grade lies in the accepted range.
///
/// Non-finite values never pass, so NaN cannot slip into a record.
pub fn validate_grade(value: f64) -> Result<f64> {
    if !value.is_finite() || !(MIN_GRADE..=MAX_GRADE).contains(&value) {
        return Err(Error::invalid(format!(
            "Grade must be between {} and {}, got {}",
            MIN_GRADE, MAX_GRADE, value
        )));
    }
    Ok(value)
}

/// Parse a numeric-like string into a validated grade
pub fn parse_grade(text: &str) -> Result<f64> {
    let value: f64 = text.trim().parse().map_err(|_| {
        Error::invalid(format!(
            "Invalid grade: {}. Must be a number between {}-{}",
            text, MIN_GRADE, MAX_GRADE
        ))
    })?;
    validate_grade(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_grade_range() {
        assert_eq!(validate_grade(0.0).unwrap(), 0.0);
        assert_eq!(validate_grade(100.0).unwrap(), 100.0);
        assert_eq!(validate_grade(88.5).unwrap(), 88.5);
        assert!(validate_grade(-0.01).is_err());
        assert!(validate_grade(100.01).is_err());
    }

    #[test]
    fn test_validate_grade_non_finite() {
        assert!(validate_grade(f64::NAN).is_err());
        assert!(validate_grade(f64::INFINITY).is_err());
        assert!(validate_grade(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_parse_grade() {
        assert_eq!(parse_grade("95").unwrap(), 95.0);
        assert_eq!(parse_grade(" 88.5 ").unwrap(), 88.5);
        assert!(matches!(parse_grade("Fifty"), Err(Error::InvalidArgument(_))));
        assert!(matches!(parse_grade(""), Err(Error::InvalidArgument(_))));
        assert!(matches!(parse_grade("150"), Err(Error::InvalidArgument(_))));
    }
}
