//! Validated fully qualified type names.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from validating a type name.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum TypeNameError {
    /// The name is empty or only whitespace.
    #[error("type name is empty")]
    #[diagnostic(
        code(typesearch::type_name::empty),
        help("pass a fully qualified name such as `java.util.List`")
    )]
    Empty,

    /// A segment between dots is empty.
    #[error("type name `{name}` has an empty segment")]
    #[diagnostic(
        code(typesearch::type_name::empty_segment),
        help("remove the leading, trailing or doubled `.`")
    )]
    EmptySegment {
        /// The rejected name.
        name: String,
    },

    /// A character that cannot appear in a type name.
    #[error("type name `{name}` contains invalid character `{ch}`")]
    #[diagnostic(
        code(typesearch::type_name::invalid_character),
        help("type names are letters, digits, `_` and `$` separated by `.`; generics and array brackets are not part of the name")
    )]
    InvalidCharacter {
        /// The rejected name.
        name: String,
        /// The first offending character.
        ch: char,
    },

    /// A segment starts with a digit.
    #[error("segment `{segment}` of type name `{name}` starts with a digit")]
    #[diagnostic(code(typesearch::type_name::leading_digit))]
    LeadingDigit {
        /// The rejected name.
        name: String,
        /// The offending segment.
        segment: String,
    },
}

/// A fully qualified type name such as `java.util.Map$Entry`.
///
/// Names are compared exactly: `pkg.Foo` never equals `Foo` or
/// `pkg.Foo.Bar`. Nested types use whatever separator the type model uses
/// for them (`$` for binary names); no normalisation happens here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeName(String);

impl TypeName {
    /// Validates and wraps `name`. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, has an empty segment, contains
    /// a character other than letters, digits, `_`, `$` and `.`, or has a
    /// segment starting with a digit.
    pub fn new(name: &str) -> Result<Self, TypeNameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TypeNameError::Empty);
        }

        if let Some(ch) = name
            .chars()
            .find(|&c| !(c.is_alphanumeric() || c == '_' || c == '$' || c == '.'))
        {
            return Err(TypeNameError::InvalidCharacter {
                name: name.to_string(),
                ch,
            });
        }

        for segment in name.split('.') {
            if segment.is_empty() {
                return Err(TypeNameError::EmptySegment {
                    name: name.to_string(),
                });
            }
            if segment.starts_with(|c: char| c.is_ascii_digit()) {
                return Err(TypeNameError::LeadingDigit {
                    name: name.to_string(),
                    segment: segment.to_string(),
                });
            }
        }

        Ok(Self(name.to_string()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if `fully_qualified_name` names exactly this type.
    #[must_use]
    pub fn matches(&self, fully_qualified_name: &str) -> bool {
        self.0 == fully_qualified_name
    }
}

impl FromStr for TypeName {
    type Err = TypeNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TypeName {
    type Error = TypeNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<TypeName> for String {
    fn from(name: TypeName) -> Self {
        name.0
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_qualified_and_nested_names() {
        for name in ["Foo", "pkg.Foo", "java.util.Map$Entry", "a.b_c.$Gen1"] {
            assert!(TypeName::new(name).is_ok(), "{name} should be valid");
        }
        assert_eq!(TypeName::new("  pkg.Foo ").map(String::from), Ok("pkg.Foo".to_string()));
    }

    #[test]
    fn rejects_malformed_names() {
        assert_eq!(TypeName::new(""), Err(TypeNameError::Empty));
        assert_eq!(TypeName::new("   "), Err(TypeNameError::Empty));
        assert!(matches!(
            TypeName::new("pkg..Foo"),
            Err(TypeNameError::EmptySegment { .. })
        ));
        assert!(matches!(
            TypeName::new(".Foo"),
            Err(TypeNameError::EmptySegment { .. })
        ));
        assert!(matches!(
            TypeName::new("java.util.List<String>"),
            Err(TypeNameError::InvalidCharacter { ch: '<', .. })
        ));
        assert!(matches!(
            TypeName::new("pkg.*"),
            Err(TypeNameError::InvalidCharacter { ch: '*', .. })
        ));
        assert_eq!(
            TypeName::new("pkg.1Foo"),
            Err(TypeNameError::LeadingDigit {
                name: "pkg.1Foo".to_string(),
                segment: "1Foo".to_string(),
            })
        );
    }

    #[test]
    fn matches_exactly() {
        let name: TypeName = "a.B".parse().expect("valid name");
        assert!(name.matches("a.B"));
        assert!(!name.matches("a"));
        assert!(!name.matches("B"));
        assert!(!name.matches("a.B.C"));
    }

    #[test]
    fn deserializes_with_validation() {
        let name: TypeName = serde_json::from_str(r#""pkg.Foo""#).expect("valid name");
        assert_eq!(name.as_str(), "pkg.Foo");
        assert!(serde_json::from_str::<TypeName>(r#""""#).is_err());
    }
}
