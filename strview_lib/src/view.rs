pub use self::iter::Bytes;
pub use self::str_view::StrView;

pub mod compare;
pub mod iter;
pub mod render;
pub mod search;
pub mod str_view;

/// Shorthand for viewing a literal, mirrors `StrView::from`.
///
/// Accepts anything with a `From` conversion, in practice string and byte
/// string literals.
#[macro_export]
macro_rules! sv {
    ($content:expr) => {
        $crate::view::StrView::from($content)
    };
}
