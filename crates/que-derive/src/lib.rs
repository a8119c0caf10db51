//! Derive macros for que
//!
//! Provides `#[derive(ToFields)]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod attrs;
mod to_fields;

/// Derive `ToFields` for a struct with named fields.
///
/// # Example
///
/// ```ignore
/// use que::ToFields;
///
/// #[derive(ToFields)]
/// #[que(rename_all = "camelCase")]
/// struct NewUser {
///     user_name: String,
///     #[que(rename = "mail")]
///     email: Option<String>,
///     #[que(skip)]
///     password_hash: String,
/// }
/// ```
///
/// # Attributes
///
/// - `#[que(rename_all = "...")]` on the struct - rename every column
///   (`snake_case`, `camelCase`, `PascalCase`, `kebab-case`,
///   `SCREAMING_SNAKE_CASE`, `lowercase`, `UPPERCASE`)
/// - `#[que(rename = "name")]` - use a different column name
/// - `#[que(skip)]` - leave the field out
///
/// Every kept field must implement `serde::Serialize`.
#[proc_macro_derive(ToFields, attributes(que))]
pub fn derive_to_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    to_fields::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
