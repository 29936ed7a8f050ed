//! Core parsing and code generation for the covenant contract attributes.
//!
//! The `#[maintains(...)]` attribute turns a list of `bool`-valued conditions
//! over `self` into an implementation of `covenant::Invariant`. This crate
//! holds the parser for the attribute arguments and the generator for the
//! impl, so both can be tested without going through a proc-macro boundary.

use syn::{
    Attribute, Expr, Meta, Token,
    parse::{Parse, ParseStream, Result},
    punctuated::Punctuated,
    spanned::Spanned,
};

pub mod instrument;

/// An invariant spec: the conditions a type maintains across every contracted call.
#[derive(Debug)]
pub struct InvariantSpec {
    /// Invariants: conditions that must hold when a contracted call starts and when it returns.
    pub maintains: Vec<Condition>,
}

impl InvariantSpec {
    /// True when the spec carries no conditions, i.e. the invariant is trivially true.
    pub fn is_empty(&self) -> bool {
        self.maintains.is_empty()
    }
}

/// A condition represented by a `bool`-valued expression.
#[derive(Debug)]
pub struct Condition {
    /// The `bool`-valued expression.
    pub expr: Expr,
    /// Build configuration filter to decide whether to emit the runtime check.
    /// Passed to a `cfg!()` guard in the generated invariant body.
    pub cfg: Option<Meta>,
}

impl Parse for InvariantSpec {
    fn parse(input: ParseStream) -> Result<Self> {
        let args = Punctuated::<ConditionArg, Token![,]>::parse_terminated(input)?;

        let mut maintains: Vec<Condition> = vec![];

        for ConditionArg { cfg, expr } in args {
            if let Expr::Array(conditions) = expr {
                for expr in conditions.elems {
                    reject_closure(&expr)?;
                    maintains.push(Condition {
                        expr,
                        cfg: cfg.clone(),
                    });
                }
            } else {
                reject_closure(&expr)?;
                maintains.push(Condition { expr, cfg });
            }
        }

        Ok(InvariantSpec { maintains })
    }
}

/// One comma-separated entry of the attribute: an optional `#[cfg(...)]` and an expression.
struct ConditionArg {
    cfg: Option<Meta>,
    expr: Expr,
}

impl Parse for ConditionArg {
    fn parse(input: ParseStream) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let cfg = parse_cfg_attribute(&attrs)?;
        Ok(ConditionArg {
            cfg,
            expr: input.parse()?,
        })
    }
}

fn reject_closure(expr: &Expr) -> Result<()> {
    if let Expr::Closure(closure) = expr {
        return Err(syn::Error::new_spanned(
            closure,
            "invariant conditions are `bool` expressions over `self`, not closures",
        ));
    }
    Ok(())
}

fn parse_cfg_attribute(attrs: &[Attribute]) -> Result<Option<Meta>> {
    let mut cfg_attrs: Vec<Meta> = vec![];

    for attr in attrs {
        if attr.path().is_ident("cfg") {
            cfg_attrs.push(attr.parse_args()?);
        } else {
            return Err(syn::Error::new(
                attr.span(),
                "unsupported attribute; only `cfg` is allowed",
            ));
        }
    }

    if cfg_attrs.len() > 1 {
        return Err(syn::Error::new(
            cfg_attrs[1].span(),
            "multiple `cfg` attributes are not supported",
        ));
    }

    Ok(cfg_attrs.pop())
}

#[cfg(test)]
mod test_parse_spec;

#[cfg(test)]
mod test_util;
