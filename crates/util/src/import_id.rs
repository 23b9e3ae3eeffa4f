//! Parsing of host import identifiers.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportIdError {
    #[error("import identifier is empty")]
    Empty,
    #[error("expected a decimal integer identifier, got '{0}'")]
    NotAnInteger(String),
    #[error("identifier must be positive, got {0}")]
    NotPositive(i64),
}

/// Parse an import identifier into an upstream numeric id.
///
/// Surrounding whitespace is ignored; anything else must be a positive
/// decimal integer.
pub fn parse_import_id(raw: &str) -> Result<i64, ImportIdError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ImportIdError::Empty);
    }
    if !trimmed.bytes().all(|byte| byte.is_ascii_digit() || byte == b'-') {
        return Err(ImportIdError::NotAnInteger(trimmed.to_string()));
    }
    let id: i64 = trimmed
        .parse()
        .map_err(|_| ImportIdError::NotAnInteger(trimmed.to_string()))?;
    if id <= 0 {
        return Err(ImportIdError::NotPositive(id));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_decimal_integers() {
        assert_eq!(parse_import_id("42"), Ok(42));
        assert_eq!(parse_import_id(" 7\n"), Ok(7));
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(parse_import_id(""), Err(ImportIdError::Empty));
        assert!(matches!(parse_import_id("abc"), Err(ImportIdError::NotAnInteger(_))));
        assert!(matches!(parse_import_id("+4"), Err(ImportIdError::NotAnInteger(_))));
        assert!(matches!(parse_import_id("1.0"), Err(ImportIdError::NotAnInteger(_))));
        assert!(matches!(parse_import_id("99999999999999999999"), Err(ImportIdError::NotAnInteger(_))));
        assert_eq!(parse_import_id("0"), Err(ImportIdError::NotPositive(0)));
        assert_eq!(parse_import_id("-3"), Err(ImportIdError::NotPositive(-3)));
    }
}
