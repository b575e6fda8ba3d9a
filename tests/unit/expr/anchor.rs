use super::*;
use crate::foundation::core::{Attribute, ItemId};

fn leading(item: u64) -> Anchor<XAxis> {
    Anchor::new(ItemId(item), Attribute::Leading).unwrap()
}

fn trailing(item: u64) -> Anchor<XAxis> {
    Anchor::new(ItemId(item), Attribute::Trailing).unwrap()
}

fn top(item: u64) -> Anchor<YAxis> {
    Anchor::new(ItemId(item), Attribute::Top).unwrap()
}

#[test]
fn plain_plus_constant_becomes_offset() {
    let e = AnchorExpr::Plain(leading(1)) + 10;
    assert_eq!(e, AnchorExpr::Offset(leading(1), 10.0));
    assert_eq!(e.constant(), 10.0);
    assert_eq!(e.anchor(), leading(1));
}

#[test]
fn offsets_accumulate_without_nesting() {
    let e = AnchorExpr::Plain(leading(1)) + 10 - 4 + 0.5;
    assert_eq!(e, AnchorExpr::Offset(leading(1), 6.5));
}

#[test]
fn addition_is_associative() {
    let base = AnchorExpr::from(top(2));
    for (c1, c2) in [(1.0, 2.0), (-3.5, 3.5), (0.0, 12.25)] {
        assert_eq!((base + c1) + c2, base + (c1 + c2));
        let shifted = AnchorExpr::Offset(top(2), 7.0);
        assert_eq!((shifted + c1) + c2, shifted + (c1 + c2));
    }
}

#[test]
fn addition_commutes_at_call_site() {
    let e = AnchorExpr::Plain(top(3));
    assert_eq!(5 + e, e + 5);
    assert_eq!(2.5 + e, e + 2.5);
}

#[test]
fn integral_and_real_scalars_agree() {
    let e = AnchorExpr::Plain(top(3));
    assert_eq!(e + 5, e + 5.0);
    assert_eq!(e - 5_u32, e - 5.0_f32);
    assert_eq!(e.plus(7), e + 7.0);
    assert_eq!(e.minus(7), e - 7);
}

#[test]
fn constant_is_rhs_minus_lhs() {
    let cases = [
        (AnchorExpr::Plain(leading(1)), AnchorExpr::Plain(trailing(2)), 0.0),
        (AnchorExpr::Plain(leading(1)), AnchorExpr::Offset(trailing(2), 10.0), 10.0),
        (AnchorExpr::Offset(leading(1), 10.0), AnchorExpr::Plain(trailing(2)), -10.0),
        (
            AnchorExpr::Offset(leading(1), 3.0),
            AnchorExpr::Offset(trailing(2), 10.0),
            7.0,
        ),
    ];
    for (lhs, rhs, expected) in cases {
        let c = lhs.equal_to(rhs);
        assert_eq!(c.first(), leading(1).erase());
        assert_eq!(c.second(), Some(trailing(2).erase()));
        assert_eq!(c.constant(), expected, "{lhs} == {rhs}");
        assert_eq!(c.multiplier(), 1.0);
    }
}

#[test]
fn shift_invariance() {
    for (c1, c2, d) in [(1.0, 4.0, 2.0), (-2.0, 6.0, -9.5), (0.0, 0.0, 3.0)] {
        let base = AnchorExpr::Offset(leading(1), c1).equal_to(AnchorExpr::Offset(trailing(2), c2));
        let plain = AnchorExpr::Plain(leading(1)).equal_to(AnchorExpr::Offset(trailing(2), c2 - c1));
        let shifted = AnchorExpr::Offset(leading(1), c1 + d)
            .equal_to(AnchorExpr::Offset(trailing(2), c2 + d));
        assert_eq!(base.constant(), plain.constant());
        assert_eq!(base.constant(), shifted.constant());
    }
}

#[test]
fn inequalities_keep_direction() {
    let lhs = AnchorExpr::Offset(leading(1), 10.0);
    let rhs = AnchorExpr::Plain(trailing(2));

    let le = lhs.less_or_equal(rhs);
    assert_eq!(le.relation(), Relation::LessOrEqual);
    assert_eq!(le.constant(), -10.0);

    let ge = lhs.greater_or_equal(rhs);
    assert_eq!(ge.relation(), Relation::GreaterOrEqual);
    assert_eq!(ge.constant(), -10.0);
}

#[test]
fn leading_equals_trailing_plus_ten() {
    let c = AnchorExpr::Plain(leading(1)).equal_to(AnchorExpr::Plain(trailing(2)) + 10);
    let direct = leading(1).constraint(Relation::Equal, trailing(2), 10.0);
    assert!(c.same_relationship(&direct));
}

#[test]
fn display_shows_constant() {
    assert_eq!(AnchorExpr::Plain(top(4)).to_string(), "item#4.top");
    assert_eq!((AnchorExpr::Plain(top(4)) + 3).to_string(), "item#4.top + 3");
}
