//! SQL keywords used when rendering clauses.

use std::fmt;

/// Comparison and pattern operators for an [`Expression`](crate::Expression).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Op {
    /// `=`
    #[default]
    Eq,
    /// `<>`
    Ne,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `LIKE`
    Like,
    /// `ILIKE` (case-insensitive LIKE)
    ILike,
    /// `NOT LIKE`
    NotLike,
    /// `NOT ILIKE`
    NotILike,
    /// `REGEXP`
    Regexp,
}

impl Op {
    pub const fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Ne => "<>",
            Op::Gt => ">",
            Op::Gte => ">=",
            Op::Lt => "<",
            Op::Lte => "<=",
            Op::Like => "LIKE",
            Op::ILike => "ILIKE",
            Op::NotLike => "NOT LIKE",
            Op::NotILike => "NOT ILIKE",
            Op::Regexp => "REGEXP",
        }
    }

    /// Whether this is a pattern-matching operator.
    pub const fn is_pattern(self) -> bool {
        matches!(
            self,
            Op::Like | Op::ILike | Op::NotLike | Op::NotILike | Op::Regexp
        )
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of JOIN. A join without one renders as a bare `JOIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinType {
    Right,
    Left,
    Inner,
    Outer,
}

impl JoinType {
    pub const fn as_str(self) -> &'static str {
        match self {
            JoinType::Right => "RIGHT",
            JoinType::Left => "LEFT",
            JoinType::Inner => "INNER",
            JoinType::Outer => "OUTER",
        }
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword that opens a filter clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lead {
    #[default]
    Where,
    /// Continues an existing condition, as in `JOIN ... ON a = b AND ...`.
    And,
}

impl Lead {
    pub const fn as_str(self) -> &'static str {
        match self {
            Lead::Where => "WHERE",
            Lead::And => "AND",
        }
    }
}

impl fmt::Display for Lead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_text() {
        assert_eq!(Op::default().to_string(), "=");
        assert_eq!(Op::Ne.to_string(), "<>");
        assert_eq!(Op::NotILike.to_string(), "NOT ILIKE");
        assert!(Op::Regexp.is_pattern());
        assert!(!Op::Gte.is_pattern());
    }

    #[test]
    fn join_and_lead_text() {
        assert_eq!(JoinType::Left.to_string(), "LEFT");
        assert_eq!(Lead::default().to_string(), "WHERE");
        assert_eq!(Lead::And.as_str(), "AND");
    }
}
