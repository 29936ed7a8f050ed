use crate::{Condition, InvariantSpec};
use pretty_assertions::assert_eq;
use quote::ToTokens;
use syn::parse::{Parse, ParseStream, Result};

impl Parse for Condition {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(Condition {
            expr: input.parse()?,
            cfg: None,
        })
    }
}

pub fn assert_tokens_eq<L: ToTokens, R: ToTokens>(left: &L, right: &R) {
    let left_str = left.to_token_stream().to_string();
    let right_str = right.to_token_stream().to_string();
    assert_eq!(left_str, right_str);
}

pub fn assert_spec_eq(left: &InvariantSpec, right: &InvariantSpec) {
    // Destructure to ensure we handle all fields - compilation will fail if fields are added
    let InvariantSpec {
        maintains: left_maintains,
    } = left;

    let InvariantSpec {
        maintains: right_maintains,
    } = right;

    assert_eq!(
        left_maintains.len(),
        right_maintains.len(),
        "number of `maintains` items do not match"
    );

    for (i, (left_item, right_item)) in left_maintains.iter().zip(right_maintains).enumerate() {
        let msg_prefix = format!("`maintains` items at index {}, ", i);
        assert_condition_eq(left_item, right_item, &msg_prefix);
    }
}

fn assert_condition_eq(left: &Condition, right: &Condition, msg_prefix: &str) {
    let Condition {
        expr: left_expr,
        cfg: left_cfg,
    } = left;

    let Condition {
        expr: right_expr,
        cfg: right_cfg,
    } = right;

    assert_eq!(
        left_expr.to_token_stream().to_string(),
        right_expr.to_token_stream().to_string(),
        "{}`expr` does not match",
        msg_prefix
    );

    assert_eq!(
        left_cfg.to_token_stream().to_string(),
        right_cfg.to_token_stream().to_string(),
        "{}`cfg` does not match",
        msg_prefix
    );
}
