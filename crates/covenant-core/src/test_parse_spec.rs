use crate::test_util::assert_spec_eq;

use super::*;
use syn::parse_quote;

#[test]
fn test_parse_single_condition() {
    let spec: InvariantSpec = parse_quote! {
        self.count <= self.capacity
    };

    let expected = InvariantSpec {
        maintains: vec![parse_quote! { self.count <= self.capacity }],
    };

    assert_spec_eq(&spec, &expected);
}

#[test]
fn test_parse_empty_spec() {
    let spec: InvariantSpec = parse_quote! {};
    assert!(spec.is_empty());
}

#[test]
fn test_parse_multiple_conditions_with_trailing_comma() {
    let spec: InvariantSpec = parse_quote! {
        self.len <= self.items.len(),
        !self.name.is_empty(),
    };

    let expected = InvariantSpec {
        maintains: vec![
            parse_quote! { self.len <= self.items.len() },
            parse_quote! { !self.name.is_empty() },
        ],
    };

    assert_spec_eq(&spec, &expected);
}

#[test]
fn test_parse_array_of_conditions() {
    let spec: InvariantSpec = parse_quote! {
        [
            self.head < self.capacity,
            self.tail < self.capacity,
        ],
        self.capacity.is_power_of_two(),
    };

    let expected = InvariantSpec {
        maintains: vec![
            parse_quote! { self.head < self.capacity },
            parse_quote! { self.tail < self.capacity },
            parse_quote! { self.capacity.is_power_of_two() },
        ],
    };

    assert_spec_eq(&spec, &expected);
}

#[test]
fn test_parse_cfg_attributes() {
    let spec: InvariantSpec = parse_quote! {
        #[cfg(debug_assertions)]
        self.is_sorted(),
        #[cfg(feature = "expensive")]
        [self.checksum_ok(), self.index_ok()],
        self.len > 0,
    };

    let expected = InvariantSpec {
        maintains: vec![
            Condition {
                expr: parse_quote! { self.is_sorted() },
                cfg: Some(parse_quote! { debug_assertions }),
            },
            Condition {
                expr: parse_quote! { self.checksum_ok() },
                cfg: Some(parse_quote! { feature = "expensive" }),
            },
            Condition {
                expr: parse_quote! { self.index_ok() },
                cfg: Some(parse_quote! { feature = "expensive" }),
            },
            parse_quote! { self.len > 0 },
        ],
    };

    assert_spec_eq(&spec, &expected);
}

#[test]
fn test_parse_macro_in_condition() {
    let spec: InvariantSpec = parse_quote! {
        matches!(self.state, State::Idle | State::Running),
    };

    let expected = InvariantSpec {
        maintains: vec![parse_quote! { matches!(self.state, State::Idle | State::Running) }],
    };

    assert_spec_eq(&spec, &expected);
}

#[test]
#[should_panic(expected = "unsupported attribute; only `cfg` is allowed")]
fn test_parse_non_cfg_attribute() {
    let _: InvariantSpec = parse_quote! {
        #[allow(unused)]
        self.len > 0,
    };
}

#[test]
#[should_panic(expected = "multiple `cfg` attributes are not supported")]
fn test_parse_multiple_cfg_attributes() {
    let _: InvariantSpec = parse_quote! {
        #[cfg(test)]
        #[cfg(debug_assertions)]
        self.len > 0,
    };
}

#[test]
#[should_panic(expected = "invariant conditions are `bool` expressions over `self`, not closures")]
fn test_parse_closure_condition() {
    let _: InvariantSpec = parse_quote! {
        |s: &Self| s.len > 0,
    };
}

#[test]
#[should_panic(expected = "invariant conditions are `bool` expressions over `self`, not closures")]
fn test_parse_closure_inside_array() {
    let _: InvariantSpec = parse_quote! {
        [self.len > 0, |s: &Self| s.ok],
    };
}
