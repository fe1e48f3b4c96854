//! The value being guarded: site, name and optional message override

use std::borrow::Cow;
use std::fmt;

use crate::foundation::{Failure, GuardError, Site};

/// Identifies what a guard reports against.
///
/// Every guard method lives on `Subject`, so the argument and property
/// calling conventions share one implementation and differ only in
/// [`Site`].
///
/// # Examples
///
/// ```
/// use nebula_guard::prelude::*;
///
/// fn scale(factor: f64) -> GuardResult<f64> {
///     let factor = arg("factor").finite(factor)?;
///     Ok(factor * 2.0)
/// }
///
/// assert_eq!(scale(1.5), Ok(3.0));
/// assert!(scale(f64::INFINITY).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subject {
    site: Site,
    name: Cow<'static, str>,
    message: Option<Cow<'static, str>>,
}

impl Subject {
    /// A function parameter called `name`.
    pub fn argument(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            site: Site::Argument,
            name: name.into(),
            message: None,
        }
    }

    /// A property called `name`.
    ///
    /// Rust has no caller-member-name facility; pass the name explicitly or
    /// use [`property!`](crate::property) inside the setter.
    pub fn property(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            site: Site::Property,
            name: name.into(),
            message: None,
        }
    }

    /// Replaces the guard's default message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Argument or property.
    #[must_use]
    pub const fn site(&self) -> Site {
        self.site
    }

    /// The identifying name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The message override, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Builds the error for a failed check.
    ///
    /// `default_message` is only evaluated when no override was supplied.
    pub(crate) fn reject<M>(
        &self,
        failure: Failure,
        code: &'static str,
        default_message: impl FnOnce() -> M,
    ) -> GuardError
    where
        M: Into<Cow<'static, str>>,
    {
        let message = match &self.message {
            Some(message) => message.clone(),
            None => default_message().into(),
        };

        tracing::debug!(
            target: "nebula_guard",
            site = %self.site,
            name = %self.name,
            code,
            "guard rejected value"
        );

        GuardError::new(self.site, failure, code, self.name.clone(), message)
    }

    /// Builds the error for a failed check and attaches the offending value.
    pub(crate) fn reject_value<M>(
        &self,
        failure: Failure,
        code: &'static str,
        value: &dyn fmt::Display,
        default_message: impl FnOnce() -> M,
    ) -> GuardError
    where
        M: Into<Cow<'static, str>>,
    {
        self.reject(failure, code, default_message)
            .with_value(value.to_string())
    }
}

/// Shorthand for [`Subject::argument`].
pub fn arg(name: impl Into<Cow<'static, str>>) -> Subject {
    Subject::argument(name)
}

/// Shorthand for [`Subject::property`].
pub fn prop(name: impl Into<Cow<'static, str>>) -> Subject {
    Subject::property(name)
}

/// Derives a property name from the path of a marker fn nested in a setter.
///
/// Used by [`property!`](crate::property).
#[doc(hidden)]
#[must_use]
pub fn member_name(path: &'static str) -> &'static str {
    let path = path.strip_suffix("::__here").unwrap_or(path);
    let name = path
        .rsplit("::")
        .find(|segment| *segment != "{{closure}}")
        .unwrap_or(path);
    name.strip_prefix("set_").unwrap_or(name)
}
