use super::*;
use crate::foundation::core::{Attribute, ItemId};

fn x(item: u64, attribute: Attribute) -> XEdge {
    Edge::new(Anchor::new(ItemId(item), attribute).unwrap())
}

fn y(item: u64, attribute: Attribute) -> YEdge {
    Edge::new(Anchor::new(ItemId(item), attribute).unwrap())
}

#[test]
fn arithmetic_leaves_the_facade() {
    let e: AnchorExpr<XAxis> = x(1, Attribute::Leading) + 10;
    assert_eq!(e, AnchorExpr::Offset(x(1, Attribute::Leading).anchor(), 10.0));

    let e = 10 + x(1, Attribute::Leading);
    assert_eq!(e.constant(), 10.0);

    let e = x(1, Attribute::Leading) - 2.5;
    assert_eq!(e.constant(), -2.5);
}

#[test]
fn facade_matches_direct_expression() {
    let lhs = y(1, Attribute::Top);
    let rhs = y(2, Attribute::Bottom);

    let via_facade = lhs.equal_to(rhs + 8);
    let via_expr = lhs.expr().equal_to(rhs.expr() + 8);
    assert!(via_facade.same_relationship(&via_expr));

    let via_facade = (lhs + 3).less_or_equal(rhs);
    let via_expr = lhs.expr().plus(3).less_or_equal(rhs.expr());
    assert!(via_facade.same_relationship(&via_expr));
    assert_eq!(via_facade.constant(), -3.0);
}

#[test]
fn facade_accepts_mixed_operands() {
    let a = x(1, Attribute::CenterX);
    let b = x(2, Attribute::CenterX);

    assert_eq!(a.equal_to(b).constant(), 0.0);
    assert_eq!(a.greater_or_equal(b - 4).constant(), -4.0);
    assert_eq!(a.less_or_equal(AnchorExpr::from(b)).relation(), Relation::LessOrEqual);
}

#[test]
fn display_is_the_anchor() {
    assert_eq!(y(9, Attribute::LastBaseline).to_string(), "item#9.last_baseline");
}
