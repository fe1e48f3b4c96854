//! # nebula-guard
//!
//! Inline argument and property guards for the Nebula workflow engine.
//!
//! A guard checks one value and either returns it unchanged or fails with a
//! [`GuardError`](foundation::GuardError) that records the site, the name,
//! the message and the offending value.
//!
//! ## Quick Start
//!
//! ```
//! use nebula_guard::prelude::*;
//!
//! fn resize(width: i32, ratio: f64) -> GuardResult<(i32, f64)> {
//!     let width = arg("width").positive(width)?;
//!     let ratio = arg("ratio").finite(ratio)?;
//!     Ok((width, ratio))
//! }
//!
//! assert_eq!(resize(4, 0.5), Ok((4, 0.5)));
//! assert_eq!(resize(0, 0.5).unwrap_err().name(), "width");
//! ```
//!
//! ## Guard Families
//!
//! - **Numeric**: `not_negative`, `positive`, `negative`, `not_positive`,
//!   `non_zero`, `finite`, `not_nan`, backed by the capability descriptors in
//!   [`info`]
//! - **Comparison**: `at_most`, `less_than`, `at_least`, `greater_than`
//! - **Null**: `present`
//! - **Default**: `not_default`
//! - **Named enum**: `named`, `named_or_none`, `named_flags`,
//!   `named_flags_or_none`
//!
//! Every guard is a method on [`Subject`](foundation::Subject); build one with
//! [`arg`](foundation::arg), [`prop`](foundation::prop) or [`property!`].

pub mod foundation;
pub mod frozen;
pub mod guards;
pub mod info;
mod macros;
pub mod prelude;
