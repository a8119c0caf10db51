//! Placeholder styles.
//!
//! The six DB-API `paramstyle`s fall into three families and every
//! placeholder decision in the crate is a `match` on the family:
//!
//! | family       | style      | template    |
//! |--------------|------------|-------------|
//! | `Positional` | `qmark`    | `?`         |
//! | `Positional` | `format`   | `%s`        |
//! | `Numbered`   | `numeric`  | `:1`        |
//! | `Numbered`   | `dollar`   | `$1`        |
//! | `Named`      | `named`    | `:name`     |
//! | `Named`      | `pyformat` | `%(name)s`  |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueError;

/// Styles that emit the same literal for every parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Positional {
    /// `?`
    QMark,
    /// `%s`
    Format,
}

impl Positional {
    /// The literal placeholder.
    pub const fn placeholder(self) -> &'static str {
        match self {
            Positional::QMark => "?",
            Positional::Format => "%s",
        }
    }
}

/// Styles that number each parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Numbered {
    /// `:1`
    Colon,
    /// `$1`
    Dollar,
}

impl Numbered {
    /// Render the placeholder for parameter `n`.
    pub fn placeholder(self, n: usize) -> String {
        match self {
            Numbered::Colon => format!(":{n}"),
            Numbered::Dollar => format!("${n}"),
        }
    }
}

/// Styles that refer to parameters by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Named {
    /// `:name`
    Colon,
    /// `%(name)s`
    PyFormat,
}

impl Named {
    /// Render the placeholder for parameter `name`.
    pub fn placeholder(self, name: &str) -> String {
        match self {
            Named::Colon => format!(":{name}"),
            Named::PyFormat => format!("%({name})s"),
        }
    }
}

/// A DB-API parameter style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ParamStyle {
    Positional(Positional),
    Numbered(Numbered),
    Named(Named),
}

impl ParamStyle {
    pub const QMARK: ParamStyle = ParamStyle::Positional(Positional::QMark);
    pub const FORMAT: ParamStyle = ParamStyle::Positional(Positional::Format);
    pub const NUMERIC: ParamStyle = ParamStyle::Numbered(Numbered::Colon);
    pub const DOLLAR: ParamStyle = ParamStyle::Numbered(Numbered::Dollar);
    pub const NAMED: ParamStyle = ParamStyle::Named(Named::Colon);
    pub const PYFORMAT: ParamStyle = ParamStyle::Named(Named::PyFormat);

    /// Every supported style.
    pub const ALL: [ParamStyle; 6] = [
        Self::QMARK,
        Self::FORMAT,
        Self::NUMERIC,
        Self::DOLLAR,
        Self::NAMED,
        Self::PYFORMAT,
    ];

    /// The DB-API `paramstyle` name.
    pub const fn name(self) -> &'static str {
        match self {
            ParamStyle::Positional(Positional::QMark) => "qmark",
            ParamStyle::Positional(Positional::Format) => "format",
            ParamStyle::Numbered(Numbered::Colon) => "numeric",
            ParamStyle::Numbered(Numbered::Dollar) => "dollar",
            ParamStyle::Named(Named::Colon) => "named",
            ParamStyle::Named(Named::PyFormat) => "pyformat",
        }
    }

    /// Whether bound values are keyed by name rather than position.
    pub const fn is_named(self) -> bool {
        matches!(self, ParamStyle::Named(_))
    }

    /// Render one placeholder.
    ///
    /// `name` is only used by the named family, `position` only by the
    /// numbered family.
    pub fn placeholder(self, name: &str, position: usize) -> String {
        match self {
            ParamStyle::Positional(p) => p.placeholder().to_string(),
            ParamStyle::Numbered(n) => n.placeholder(position),
            ParamStyle::Named(n) => n.placeholder(name),
        }
    }
}

impl fmt::Display for ParamStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParamStyle {
    type Err = QueError;

    /// Accepts DB-API names (case-insensitive) and literal templates.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let style = match s.trim().to_ascii_lowercase().as_str() {
            "qmark" | "?" => Self::QMARK,
            "format" | "%s" => Self::FORMAT,
            "numeric" | ":1" => Self::NUMERIC,
            "dollar" | "$1" => Self::DOLLAR,
            "named" | ":name" => Self::NAMED,
            "pyformat" | "%(name)s" => Self::PYFORMAT,
            other => {
                return Err(QueError::config(format!(
                    "unknown param style `{other}` (expected one of qmark, format, numeric, dollar, named, pyformat)"
                )));
            }
        };
        Ok(style)
    }
}

impl TryFrom<String> for ParamStyle {
    type Error = QueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ParamStyle> for String {
    fn from(style: ParamStyle) -> Self {
        style.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_per_family() {
        assert_eq!(ParamStyle::QMARK.placeholder("foo", 3), "?");
        assert_eq!(ParamStyle::FORMAT.placeholder("foo", 3), "%s");
        assert_eq!(ParamStyle::NUMERIC.placeholder("foo", 3), ":3");
        assert_eq!(ParamStyle::DOLLAR.placeholder("foo", 3), "$3");
        assert_eq!(ParamStyle::NAMED.placeholder("foo", 3), ":foo");
        assert_eq!(ParamStyle::PYFORMAT.placeholder("foo", 3), "%(foo)s");
    }

    #[test]
    fn parse_names_and_templates() {
        for style in ParamStyle::ALL {
            assert_eq!(style.name().parse::<ParamStyle>().unwrap(), style);
        }
        assert_eq!("$1".parse::<ParamStyle>().unwrap(), ParamStyle::DOLLAR);
        assert_eq!(" PyFormat ".parse::<ParamStyle>().unwrap(), ParamStyle::PYFORMAT);
        assert_eq!("%(name)s".parse::<ParamStyle>().unwrap(), ParamStyle::PYFORMAT);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "oracle".parse::<ParamStyle>().unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn serde_uses_dbapi_name() {
        let json = serde_json::to_string(&ParamStyle::DOLLAR).unwrap();
        assert_eq!(json, "\"dollar\"");
        let style: ParamStyle = serde_json::from_str("\"named\"").unwrap();
        assert_eq!(style, ParamStyle::NAMED);
        assert!(serde_json::from_str::<ParamStyle>("\"bogus\"").is_err());
    }

    #[test]
    fn only_named_family_is_named() {
        let named: Vec<_> = ParamStyle::ALL.into_iter().filter(|s| s.is_named()).collect();
        assert_eq!(named, vec![ParamStyle::NAMED, ParamStyle::PYFORMAT]);
    }
}
