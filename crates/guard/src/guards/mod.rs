//! Guard families
//!
//! - [`numeric`]: sign, zero, finiteness and NaN guards over capability
//!   descriptors
//! - [`comparison`]: ordered bounds
//! - [`nullable`]: absent values
//! - [`default`]: default-valued inputs
//! - [`named`]: named enumeration members and flag combinations
//!
//! Each family adds its methods to [`Subject`](crate::foundation::Subject).

pub mod comparison;
pub mod default;
pub mod named;
pub mod nullable;
pub mod numeric;

pub use comparison::Bound;
pub use default::Defaultable;
pub use named::NamedEnum;
pub use nullable::Nullable;
pub use numeric::SignRule;

/// Type name with module paths stripped, e.g. `FrozenArray<u8>`.
pub(crate) fn type_label<T: ?Sized>() -> String {
    fn is_delimiter(c: char) -> bool {
        matches!(c, '<' | '>' | ',' | ' ' | '[' | ']' | '(' | ')' | ';' | '&' | '*')
    }

    let full = std::any::type_name::<T>();
    let mut label = String::with_capacity(full.len());
    for piece in full.split_inclusive(is_delimiter) {
        let (path, tail) = match piece.char_indices().last() {
            Some((i, c)) if is_delimiter(c) => piece.split_at(i),
            _ => (piece, ""),
        };
        label.push_str(path.rsplit("::").next().unwrap_or(path));
        label.push_str(tail);
    }
    label
}
