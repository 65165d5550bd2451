use serde_json::Value;

/// Tagged predicate applied to one column of a query.
///
/// `In`/`NotIn` carry a candidate sequence, `Like`/`NotLike` a pattern,
/// every other kind a single operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparator {
    Equal(Value),
    NotEqual(Value),
    GreaterThan(Value),
    GreaterThanOrEqualTo(Value),
    LesserThan(Value),
    LesserThanOrEqualTo(Value),
    In(Vec<Value>),
    NotIn(Vec<Value>),
    Like(String),
    NotLike(String),
}

impl Comparator {
    /// Equal condition
    pub fn eq(value: impl Into<Value>) -> Self {
        Self::Equal(value.into())
    }

    /// Not equal condition
    pub fn ne(value: impl Into<Value>) -> Self {
        Self::NotEqual(value.into())
    }

    /// Greater than condition
    pub fn gt(value: impl Into<Value>) -> Self {
        Self::GreaterThan(value.into())
    }

    /// Greater than or equal condition
    pub fn gte(value: impl Into<Value>) -> Self {
        Self::GreaterThanOrEqualTo(value.into())
    }

    /// Less than condition
    pub fn lt(value: impl Into<Value>) -> Self {
        Self::LesserThan(value.into())
    }

    /// Less than or equal condition
    pub fn lte(value: impl Into<Value>) -> Self {
        Self::LesserThanOrEqualTo(value.into())
    }

    /// IN condition over a candidate sequence
    pub fn in_values<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        Self::In(values.into_iter().map(Into::into).collect())
    }

    /// NOT IN condition over a candidate sequence
    pub fn not_in_values<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        Self::NotIn(values.into_iter().map(Into::into).collect())
    }

    /// LIKE condition
    pub fn like(pattern: impl Into<String>) -> Self {
        Self::Like(pattern.into())
    }

    /// NOT LIKE condition
    pub fn not_like(pattern: impl Into<String>) -> Self {
        Self::NotLike(pattern.into())
    }

    /// The SQL operator token this comparator compiles to.
    pub fn sql_operator(&self) -> &'static str {
        match self {
            Self::Equal(_) => "=",
            Self::NotEqual(_) => "!=",
            Self::GreaterThan(_) => ">",
            Self::GreaterThanOrEqualTo(_) => ">=",
            Self::LesserThan(_) => "<",
            Self::LesserThanOrEqualTo(_) => "<=",
            Self::In(_) => "IN",
            Self::NotIn(_) => "NOT IN",
            Self::Like(_) => "LIKE",
            Self::NotLike(_) => "NOT LIKE",
        }
    }
}
