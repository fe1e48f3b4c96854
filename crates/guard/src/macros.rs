//! Macros for declaring guard-aware types with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`named_enum!`]: Declare an enum together with its [`NamedEnum`](crate::guards::NamedEnum) impl
//! - [`defaultable!`]: Implement [`Defaultable`](crate::guards::Defaultable) via `Default + PartialEq`
//! - [`property!`]: Build a property [`Subject`](crate::foundation::Subject) named after the enclosing setter

// ============================================================================
// NAMED ENUM MACRO
// ============================================================================

/// Declares a fieldless enum with explicit discriminants and implements
/// [`NamedEnum`](crate::guards::NamedEnum) for it.
///
/// `#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]` and `#[repr(..)]` are
/// always applied; do not repeat them.
///
/// ```
/// use nebula_guard::prelude::*;
///
/// named_enum! {
///     /// Compression level.
///     pub enum Level: u8 {
///         Fast = 1,
///         Best = 9,
///     }
/// }
///
/// assert_eq!(Level::MEMBERS.len(), 2);
/// assert_eq!(Level::Best.name(), "Best");
/// assert_eq!(Level::from_repr(1), Some(Level::Fast));
/// ```
#[macro_export]
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr($repr)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant = $value ),+
        }

        impl $crate::guards::NamedEnum for $name {
            type Repr = $repr;

            const MEMBERS: &'static [Self] = &[$(Self::$variant),+];

            #[inline]
            fn repr(self) -> $repr {
                self as $repr
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

// ============================================================================
// DEFAULTABLE MACRO
// ============================================================================

/// Implements [`Defaultable`](crate::guards::Defaultable) for types whose
/// default state is `Default::default()` under `PartialEq`.
///
/// ```
/// use nebula_guard::prelude::*;
///
/// #[derive(Default, PartialEq)]
/// struct Port(u16);
///
/// defaultable!(Port);
///
/// assert!(arg("port").not_default(Port(0)).is_err());
/// ```
#[macro_export]
macro_rules! defaultable {
    ($($t:ty),+ $(,)?) => {$(
        impl $crate::guards::Defaultable for $t {
            #[inline]
            fn is_default(&self) -> bool {
                *self == <$t as ::core::default::Default>::default()
            }
        }
    )+};
}

// ============================================================================
// PROPERTY MACRO
// ============================================================================

/// Builds a property [`Subject`](crate::foundation::Subject).
///
/// With no arguments the name is taken from the enclosing function, minus a
/// `set_` prefix. With an argument it is the same as
/// [`Subject::property`](crate::foundation::Subject::property).
///
/// ```
/// use nebula_guard::prelude::*;
///
/// struct Config {
///     retries: u32,
/// }
///
/// impl Config {
///     fn set_retries(&mut self, retries: u32) -> GuardResult<()> {
///         self.retries = property!().non_zero(retries)?;
///         Ok(())
///     }
/// }
///
/// let mut config = Config { retries: 3 };
/// let err = config.set_retries(0).unwrap_err();
/// assert_eq!(err.name(), "retries");
/// assert_eq!(err.site(), Site::Property);
/// ```
#[macro_export]
macro_rules! property {
    () => {{
        fn __here() {}
        $crate::foundation::Subject::property($crate::foundation::subject::member_name(
            ::core::any::type_name_of_val(&__here),
        ))
    }};
    ($name:expr) => {
        $crate::foundation::Subject::property($name)
    };
}
