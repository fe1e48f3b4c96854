//! Prelude module for convenient imports.
//!
//! ```
//! use nebula_guard::prelude::*;
//!
//! assert_eq!(prop("Limit").at_most(10_u8, 16), Ok(10));
//! ```

// ============================================================================
// FOUNDATION: Errors and subjects
// ============================================================================

pub use crate::foundation::{
    Failure, GuardError, GuardErrorKind, GuardResult, Site, Subject, arg, prop,
};

// ============================================================================
// GUARDS: Traits the guard methods are bounded on
// ============================================================================

pub use crate::guards::{Bound, Defaultable, NamedEnum, Nullable, SignRule};

// ============================================================================
// INFO: Numeric capability table
// ============================================================================

pub use crate::info::{Float, Number, Sign, Signed};

// ============================================================================
// TYPES & MACROS
// ============================================================================

pub use crate::frozen::FrozenArray;
pub use crate::{defaultable, named_enum, property};
