//! Validation for table and column identifiers.
//!
//! PostgreSQL placeholders carry values, not identifiers, so every name that
//! reaches SQL text must pass through these newtypes first.

use std::fmt;

use thiserror::Error;

/// PostgreSQL identifier length limit.
const MAX_IDENTIFIER_LENGTH: usize = 63;

/// Validation errors for database identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("identifier cannot be empty")]
    Empty,

    #[error("identifier '{0}' must start with a letter or underscore")]
    InvalidStartCharacter(String),

    #[error("identifier '{0}' may only contain ASCII letters, digits and underscores")]
    InvalidCharacters(String),

    #[error("identifier '{name}' is {length} bytes long (limit {limit})")]
    TooLong {
        name: String,
        length: usize,
        limit: usize,
    },

    #[error("'{0}' is a reserved SQL keyword")]
    ReservedKeyword(String),
}

/// A validated table name that is safe to splice into SQL text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedTableName(String);

impl ValidatedTableName {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        validate_identifier(name)?;
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ValidatedTableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated column name that is safe to splice into SQL text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedFieldName(String);

impl ValidatedFieldName {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        validate_identifier(name)?;
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ValidatedFieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn validate_identifier(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::Empty);
    }

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(ValidationError::TooLong {
            name: name.to_string(),
            length: name.len(),
            limit: MAX_IDENTIFIER_LENGTH,
        });
    }

    let first = name.chars().next().ok_or(ValidationError::Empty)?;
    if !first.is_ascii_alphabetic() && first != '_' {
        return Err(ValidationError::InvalidStartCharacter(name.to_string()));
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::InvalidCharacters(name.to_string()));
    }

    if is_reserved_keyword(name) {
        return Err(ValidationError::ReservedKeyword(name.to_string()));
    }

    Ok(())
}

fn is_reserved_keyword(name: &str) -> bool {
    // Portable SQL core; identifiers colliding with these would need quoting,
    // which this layer never emits.
    const RESERVED_KEYWORDS: &[&str] = &[
        "SELECT", "INSERT", "UPDATE", "DELETE", "FROM", "WHERE", "SET", "VALUES",
        "JOIN", "INNER", "LEFT", "RIGHT", "FULL", "OUTER", "ON", "AS",
        "AND", "OR", "NOT", "NULL", "TRUE", "FALSE",
        "CASE", "WHEN", "THEN", "ELSE", "END", "EXISTS", "IN", "LIKE", "BETWEEN",
        "ORDER", "BY", "GROUP", "HAVING", "LIMIT", "OFFSET",
        "UNION", "ALL", "DISTINCT", "RETURNING",
        "CREATE", "DROP", "ALTER", "TABLE", "INDEX", "VIEW", "DATABASE", "SCHEMA",
        "PRIMARY", "KEY", "FOREIGN", "REFERENCES", "UNIQUE", "CHECK", "DEFAULT",
        "CONSTRAINT", "COLUMN", "ADD", "RENAME", "TO", "USING",
    ];

    RESERVED_KEYWORDS.contains(&name.to_ascii_uppercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_identifiers() {
        let valid = [
            "people",
            "user_profiles",
            "UserProfiles",
            "_private_table",
            "table123",
            "a",
            &"a".repeat(63),
        ];

        for name in valid {
            assert!(
                ValidatedTableName::new(name).is_ok(),
                "should accept '{}'",
                name
            );
            assert!(ValidatedFieldName::new(name).is_ok());
        }
    }

    #[test]
    fn rejects_invalid_identifiers() {
        let cases = [
            ("", ValidationError::Empty),
            (
                "123table",
                ValidationError::InvalidStartCharacter("123table".to_string()),
            ),
            (
                "user-name",
                ValidationError::InvalidCharacters("user-name".to_string()),
            ),
            (
                "user name",
                ValidationError::InvalidCharacters("user name".to_string()),
            ),
            (
                "users; --",
                ValidationError::InvalidCharacters("users; --".to_string()),
            ),
            (
                "SELECT",
                ValidationError::ReservedKeyword("SELECT".to_string()),
            ),
            (
                "select",
                ValidationError::ReservedKeyword("select".to_string()),
            ),
        ];

        for (name, expected) in cases {
            let result = ValidatedTableName::new(name);
            assert!(result.is_err(), "should reject '{}'", name);
            assert_eq!(result.unwrap_err(), expected);
        }
    }

    #[test]
    fn rejects_too_long_identifier() {
        let long = "a".repeat(64);
        match ValidatedTableName::new(&long).unwrap_err() {
            ValidationError::TooLong { length, limit, .. } => {
                assert_eq!(length, 64);
                assert_eq!(limit, 63);
            }
            other => panic!("expected TooLong, got {:?}", other),
        }
    }

    #[test]
    fn rejects_reserved_keywords_case_insensitively() {
        for keyword in ["SELECT", "insert", "Update", "DELETE", "from", "WHERE"] {
            assert!(ValidatedTableName::new(keyword).is_err());
            assert!(ValidatedFieldName::new(keyword).is_err());
        }
    }

    #[test]
    fn display_matches_input() {
        let table = ValidatedTableName::new("people").unwrap();
        let field = ValidatedFieldName::new("age").unwrap();

        assert_eq!(format!("{}", table), "people");
        assert_eq!(format!("{}", field), "age");
    }
}
