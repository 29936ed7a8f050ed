
use crate::{Condition, InvariantSpec};

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, Ident, Item, Meta, Path, Result};

/// Takes the spec and the annotated struct or enum and returns the item followed by
/// an `Invariant` impl for it.
///
/// `krate` is the path under which the runtime crate is reachable from the
/// expansion site, normally `::covenant`.
pub fn instrument_item(spec: &InvariantSpec, item: &Item, krate: &Path) -> Result<TokenStream> {
    let (ident, generics) = subject_of(item)?;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    // An empty spec keeps the trait's trivially-true default.
    let body = if spec.is_empty() {
        quote! {}
    } else {
        let checks = spec
            .maintains
            .iter()
            .map(|condition| build_check(condition, krate));
        quote! {
            #[inline]
            fn invariant(&self) {
                #(#checks)*
            }
        }
    };

    Ok(quote! {
        #item

        #[automatically_derived]
        impl #impl_generics #krate::Invariant for #ident #ty_generics #where_clause {
            #body
        }
    })
}

pub fn make_item_error<T: ToTokens>(tokens: &T, item_descr: &str) -> syn::Error {
    let msg = format!(
        "The #[maintains] attribute applies to structs and enums, not to this item: {}",
        item_descr
    );
    syn::Error::new_spanned(tokens, msg)
}

fn subject_of(item: &Item) -> Result<(&Ident, &Generics)> {
    match item {
        Item::Struct(item) => Ok((&item.ident, &item.generics)),
        Item::Enum(item) => Ok((&item.ident, &item.generics)),
        // Reading a union field needs `unsafe`, which a condition cannot carry.
        Item::Union(_) => Err(make_item_error(item, "union")),
        Item::Fn(_) => Err(make_item_error(item, "function")),
        Item::Impl(_) => Err(make_item_error(item, "impl block")),
        Item::Trait(_) => Err(make_item_error(item, "trait")),
        Item::Type(_) => Err(make_item_error(item, "type alias")),
        _ => Err(make_item_error(item, "unsupported item kind")),
    }
}

fn build_check(condition: &Condition, krate: &Path) -> TokenStream {
    let expr = &condition.expr;
    let check = quote! { #krate::maintain!(#expr); };
    guard_check(condition.cfg.as_ref(), check)
}

fn guard_check(cfg: Option<&Meta>, check: TokenStream) -> TokenStream {
    if let Some(cfg) = cfg {
        quote! { if cfg!(#cfg) { #check } }
    } else {
        check
    }
}
