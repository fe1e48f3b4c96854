//! Core guard types
//!
//! - **Errors**: [`GuardError`], [`GuardErrorKind`], [`Site`], [`Failure`]
//! - **Subjects**: [`Subject`] plus the [`arg`] / [`prop`] shorthands
//!
//! Guards themselves are methods on [`Subject`] defined next to each guard
//! family in [`crate::guards`].

pub mod error;
pub mod subject;

pub use error::{Failure, GuardError, GuardErrorKind, GuardResult, Site};
pub use subject::{Subject, arg, prop};
