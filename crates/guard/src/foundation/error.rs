//! Error type returned by every failing guard
//!
//! A [`GuardError`] records *where* the value came from ([`Site`]), *why* it
//! was rejected ([`Failure`]), the identifying name, the message and, for
//! failures that carry one, a rendering of the offending value.
//!
//! All string fields use `Cow<'static, str>` so the default messages and
//! literal names allocate nothing.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// SITE / FAILURE
// ============================================================================

/// The calling convention a guard was invoked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Site {
    /// The value was passed in as a function parameter.
    Argument,
    /// The value is being assigned to a property.
    Property,
}

impl Site {
    /// Lowercase noun used in rendered messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Argument => "parameter",
            Self::Property => "property",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The category of check that rejected a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum Failure {
    /// The value was absent.
    Null,
    /// The value was its type's default state.
    DefaultValue,
    /// The value is not a declared member of its enumeration.
    UnnamedEnum,
    /// Sign, zero, finiteness, NaN and comparison failures.
    OutOfRange,
}

/// Flattened view of [`Site`] x [`Failure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GuardErrorKind {
    /// A required argument was absent.
    ArgumentNull,
    /// A property was set to an absent value.
    PropertyNull,
    /// An argument held its type's default value.
    ArgumentDefaultValue,
    /// A property was set to its type's default value.
    PropertyDefaultValue,
    /// An argument was not a named enumeration value.
    ArgumentUnnamedEnum,
    /// A property was set to an unnamed enumeration value.
    PropertyUnnamedEnum,
    /// An argument was outside its permitted range.
    ArgumentOutOfRange,
    /// A property was set to a value outside its permitted range.
    PropertyOutOfRange,
}

impl GuardErrorKind {
    /// Combines a site and a failure category.
    #[must_use]
    pub const fn new(site: Site, failure: Failure) -> Self {
        match (site, failure) {
            (Site::Argument, Failure::Null) => Self::ArgumentNull,
            (Site::Property, Failure::Null) => Self::PropertyNull,
            (Site::Argument, Failure::DefaultValue) => Self::ArgumentDefaultValue,
            (Site::Property, Failure::DefaultValue) => Self::PropertyDefaultValue,
            (Site::Argument, Failure::UnnamedEnum) => Self::ArgumentUnnamedEnum,
            (Site::Property, Failure::UnnamedEnum) => Self::PropertyUnnamedEnum,
            (Site::Argument, Failure::OutOfRange) => Self::ArgumentOutOfRange,
            (Site::Property, Failure::OutOfRange) => Self::PropertyOutOfRange,
        }
    }
}

// ============================================================================
// GUARD ERROR
// ============================================================================

/// A rejected argument or property value.
///
/// # Examples
///
/// ```
/// use nebula_guard::prelude::*;
///
/// let err = arg("count").not_negative(-3).unwrap_err();
/// assert_eq!(err.kind(), GuardErrorKind::ArgumentOutOfRange);
/// assert_eq!(err.name(), "count");
/// assert_eq!(err.value(), Some("-3"));
/// assert_eq!(
///     err.to_string(),
///     "Value cannot be negative. (parameter 'count', actual value: -3)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{message} ({site} '{name}'{})", ActualValue(.value.as_deref()))]
pub struct GuardError {
    site: Site,
    failure: Failure,
    code: &'static str,
    name: Cow<'static, str>,
    message: Cow<'static, str>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    value: Option<Cow<'static, str>>,
}

impl GuardError {
    /// Creates an error without an attached value.
    pub fn new(
        site: Site,
        failure: Failure,
        code: &'static str,
        name: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            site,
            failure,
            code,
            name: name.into(),
            message: message.into(),
            value: None,
        }
    }

    /// Attaches the rendered offending value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_value(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Where the value came from.
    #[must_use]
    pub const fn site(&self) -> Site {
        self.site
    }

    /// Why the value was rejected.
    #[must_use]
    pub const fn failure(&self) -> Failure {
        self.failure
    }

    /// The flattened error kind.
    #[must_use]
    pub const fn kind(&self) -> GuardErrorKind {
        GuardErrorKind::new(self.site, self.failure)
    }

    /// Machine-readable code of the guard that failed, e.g. `"not_negative"`.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// Parameter or property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The custom message, or the guard's default sentence.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The offending value, when the failure carries one.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Converts the error to a JSON object.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        json!({
            "kind": self.kind(),
            "code": self.code,
            "name": self.name,
            "message": self.message,
            "value": self.value,
        })
    }
}

struct ActualValue<'a>(Option<&'a str>);

impl fmt::Display for ActualValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, ", actual value: {value}"),
            None => Ok(()),
        }
    }
}

/// A guard outcome: the checked value on success.
pub type GuardResult<T> = Result<T, GuardError>;

// ============================================================================
// TESTS
// ============================================================================
