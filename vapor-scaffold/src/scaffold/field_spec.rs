//! Field definitions and parser for CRUD scaffolding
//!
//! A field argument has the form `name:Type`. The type is an opaque token:
//! it is emitted verbatim as the Swift type of the model property and as the
//! decode type in the controller, and lower-cased as the Fluent column type
//! in the migration (`String` → `.string`).
//!
//! # Examples
//!
//! ```text
//! title:String      → @Field(key: "title") var title: String
//! count:Int         → .field("count", .int, .required)
//! bad_entry         → dropped (lenient) or rejected (strict)
//! ```

use crate::error::{Result, ScaffoldError};
use std::fmt;

const DELIMITER: char = ':';

/// One `name:Type` declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name, used as property name, storage key and form input name
    pub name: String,
    /// Type token as typed by the user (e.g. `String`, `Int`)
    pub type_name: String,
}

impl FieldSpec {
    /// Create a field declaration
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    /// Parse a field declaration from a `name:Type` argument
    ///
    /// # Examples
    ///
    /// ```
    /// # use vapor_scaffold::scaffold::field_spec::FieldSpec;
    /// let field = FieldSpec::parse("title:String").unwrap();
    /// assert_eq!(field.name, "title");
    /// assert_eq!(field.type_name, "String");
    ///
    /// assert!(FieldSpec::parse("bad_entry").is_err());
    /// assert!(FieldSpec::parse("a:b:c").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::MalformedFieldArgument`] unless the argument
    /// contains exactly one `:` with a non-empty name and type on each side.
    pub fn parse(input: &str) -> Result<Self> {
        let mut parts = input.split(DELIMITER);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(type_name), None) if !name.is_empty() && !type_name.is_empty() => {
                Ok(Self::new(name, type_name))
            }
            _ => Err(ScaffoldError::MalformedFieldArgument(input.to_string())),
        }
    }

    /// Column type tag used in the migration (`String` → `string`)
    #[must_use]
    pub fn column_type(&self) -> String {
        self.type_name.to_lowercase()
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{DELIMITER}{}", self.name, self.type_name)
    }
}

/// How malformed field arguments are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Drop malformed arguments without reporting them
    #[default]
    Lenient,
    /// Fail on the first malformed argument
    Strict,
}

impl ParseMode {
    /// Mode for a `strict` flag
    #[must_use]
    pub const fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

/// Ordered set of field declarations, unique by name
///
/// Order follows first appearance. Inserting a name that is already present
/// replaces its type in place, so the later declaration wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    fields: Vec<FieldSpec>,
}

impl FieldSet {
    /// Create an empty field set
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Parse field arguments
    ///
    /// # Errors
    ///
    /// In [`ParseMode::Strict`], returns
    /// [`ScaffoldError::MalformedFieldArgument`] for the first argument that
    /// is not a valid `name:Type` pair. Lenient parsing never fails.
    pub fn parse<S: AsRef<str>>(args: &[S], mode: ParseMode) -> Result<Self> {
        let mut set = Self::new();
        for arg in args {
            let arg = arg.as_ref();
            match FieldSpec::parse(arg) {
                Ok(spec) => set.insert(spec),
                Err(err) => match mode {
                    ParseMode::Strict => return Err(err),
                    ParseMode::Lenient => {
                        tracing::debug!(argument = arg, "dropping malformed field argument");
                    }
                },
            }
        }
        Ok(set)
    }

    /// Parse field arguments, dropping malformed ones
    #[cfg(test)]
    pub(crate) fn parse_lenient<S: AsRef<str>>(args: &[S]) -> Self {
        args.iter()
            .filter_map(|arg| FieldSpec::parse(arg.as_ref()).ok())
            .collect()
    }

    /// Insert a declaration, replacing the type of an existing field with the
    /// same name
    pub fn insert(&mut self, spec: FieldSpec) {
        if let Some(existing) = self.fields.iter_mut().find(|f| f.name == spec.name) {
            existing.type_name = spec.type_name;
        } else {
            self.fields.push(spec);
        }
    }

    /// Iterate in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, FieldSpec> {
        self.fields.iter()
    }

    /// Number of fields
    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the set holds no fields
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Map every field to a fragment, preserving order
    pub(crate) fn fragments<F>(&self, f: F) -> Vec<String>
    where
        F: FnMut(&FieldSpec) -> String,
    {
        self.fields.iter().map(f).collect()
    }
}

impl FromIterator<FieldSpec> for FieldSet {
    fn from_iter<I: IntoIterator<Item = FieldSpec>>(iter: I) -> Self {
        let mut set = Self::new();
        for spec in iter {
            set.insert(spec);
        }
        set
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a FieldSpec;
    type IntoIter = std::slice::Iter<'a, FieldSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_field() {
        let field = FieldSpec::parse("title:String").unwrap();
        assert_eq!(field.name, "title");
        assert_eq!(field.type_name, "String");
        assert_eq!(field.column_type(), "string");
        assert_eq!(field.to_string(), "title:String");
    }

    #[test]
    fn test_parse_invalid_format() {
        assert!(FieldSpec::parse("bad_entry").is_err());
        assert!(FieldSpec::parse("a:b:c").is_err());
        assert!(FieldSpec::parse(":String").is_err());
        assert!(FieldSpec::parse("title:").is_err());
        assert!(FieldSpec::parse("").is_err());
    }

    #[test]
    fn test_type_token_is_opaque() {
        let field = FieldSpec::parse("tags:[String]").unwrap();
        assert_eq!(field.type_name, "[String]");
        assert_eq!(field.column_type(), "[string]");
    }

    #[test]
    fn test_lenient_drops_malformed() {
        let set = FieldSet::parse(&["title:String", "bad_entry", "count:Int"], ParseMode::Lenient)
            .unwrap();
        assert_eq!(set.len(), 2);
        let names: Vec<_> = set.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["title", "count"]);
    }

    #[test]
    fn test_strict_rejects_malformed() {
        let result = FieldSet::parse(&["title:String", "bad_entry"], ParseMode::Strict);
        match result {
            Err(ScaffoldError::MalformedFieldArgument(arg)) => assert_eq!(arg, "bad_entry"),
            other => panic!("expected malformed field error, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_field_later_type_wins() {
        let set = FieldSet::parse_lenient(&["title:String", "title:Int"]);
        assert_eq!(set.len(), 1);
        let fields: Vec<_> = set.iter().map(ToString::to_string).collect();
        assert_eq!(fields, ["title:Int"]);
    }

    #[test]
    fn test_duplicate_keeps_first_position() {
        let set = FieldSet::parse_lenient(&["a:String", "b:Int", "a:Bool"]);
        let fields: Vec<_> = set.iter().map(ToString::to_string).collect();
        assert_eq!(fields, ["a:Bool", "b:Int"]);
    }

    #[test]
    fn test_parse_mode_from_strict() {
        assert_eq!(ParseMode::from_strict(true), ParseMode::Strict);
        assert_eq!(ParseMode::from_strict(false), ParseMode::Lenient);
        assert_eq!(ParseMode::default(), ParseMode::Lenient);
    }
}
