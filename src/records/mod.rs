/// Entity cleaning and the field transform table.
pub mod clean;
/// Key filtering, record merging, and crew assignment.
pub mod filter;
/// Field allow-lists per entity kind.
pub mod keys;
/// Scalar coercion, sentinel detection, and list splitting.
pub mod scalar;
/// Record values and accessors.
pub mod value;
