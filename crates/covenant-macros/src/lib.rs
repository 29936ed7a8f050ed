//! Attribute macros for `covenant`. Use them through the `covenant` crate,
//! which re-exports everything here.

use proc_macro::TokenStream;
use syn::{Item, Path, parse_macro_input, parse_quote};

use covenant_core::{InvariantSpec, instrument::instrument_item};

/// Declares the invariant of a struct or enum.
///
/// Each argument is a `bool`-valued expression over `self`. The attribute
/// keeps the item unchanged and adds an `Invariant` impl whose
/// `invariant()` checks the conditions in order.
#[proc_macro_attribute]
pub fn maintains(args: TokenStream, input: TokenStream) -> TokenStream {
    // Parse the conditions from the attribute, e.g. `self.count <= self.capacity, ...`
    let spec = parse_macro_input!(args as InvariantSpec);
    // Parse the item to which the attribute is attached.
    let item = parse_macro_input!(input as Item);

    let krate: Path = parse_quote! { ::covenant };

    match instrument_item(&spec, &item, &krate) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
