use super::*;

#[test]
fn anchor_new_checks_axis() {
    let item = ItemId(7);
    assert!(Anchor::<XAxis>::new(item, Attribute::Leading).is_ok());
    assert!(Anchor::<YAxis>::new(item, Attribute::FirstBaseline).is_ok());
    assert!(Anchor::<Size>::new(item, Attribute::Height).is_ok());

    let err = Anchor::<XAxis>::new(item, Attribute::Top).unwrap_err();
    assert!(err.to_string().contains("validation error:"));
    assert!(Anchor::<Size>::new(item, Attribute::CenterX).is_err());
}

#[test]
fn attribute_partitions_into_three_kinds() {
    let all = [
        Attribute::Top,
        Attribute::Bottom,
        Attribute::CenterY,
        Attribute::FirstBaseline,
        Attribute::LastBaseline,
        Attribute::Leading,
        Attribute::Trailing,
        Attribute::Left,
        Attribute::Right,
        Attribute::CenterX,
        Attribute::Width,
        Attribute::Height,
    ];
    for a in all {
        let kinds = [a.is_x_axis(), a.is_y_axis(), a.is_size()];
        assert_eq!(kinds.iter().filter(|k| **k).count(), 1, "{a}");
    }
}

#[test]
fn anchors_are_retrieval_stable() {
    let a = Anchor::<XAxis>::new(ItemId(1), Attribute::Trailing).unwrap();
    let b = Anchor::<XAxis>::new(ItemId(1), Attribute::Trailing).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.erase(), b.erase());
    assert_eq!(a.to_string(), "item#1.trailing");
}

#[test]
fn priority_orders_by_value() {
    assert!(Priority::REQUIRED > Priority::DEFAULT_HIGH);
    assert!(Priority::DEFAULT_HIGH > Priority::DEFAULT_LOW);
    assert!(Priority::DEFAULT_LOW > Priority::FITTING_SIZE);
    assert_eq!(Priority::new(750.0).unwrap(), Priority::DEFAULT_HIGH);
    assert_eq!(Priority::default(), Priority::REQUIRED);
    assert!(Priority::REQUIRED.is_required());
}

#[test]
fn priority_rejects_out_of_range() {
    assert!(Priority::new(0.0).is_err());
    assert!(Priority::new(-1.0).is_err());
    assert!(Priority::new(1000.5).is_err());
    assert!(Priority::new(f32::NAN).is_err());
    assert!(Priority::new(1000.0).is_ok());
    assert!(Priority::new(0.5).is_ok());
}

#[test]
fn priority_serde_validates() {
    let p: Priority = serde_json::from_str("500.0").unwrap();
    assert_eq!(p.value(), 500.0);
    assert_eq!(serde_json::to_string(&Priority::DEFAULT_LOW).unwrap(), "250.0");
    assert!(serde_json::from_str::<Priority>("2000.0").is_err());
}

#[test]
fn scalars_promote_to_f64() {
    assert_eq!(10_i32.to_f64(), 10.0);
    assert_eq!(3_u32.to_f64(), 3.0);
    assert_eq!(0.5_f32.to_f64(), 0.5);
    assert_eq!(2.25_f64.to_f64(), 2.25);
}

#[test]
fn relation_display() {
    assert_eq!(Relation::Equal.to_string(), "==");
    assert_eq!(Relation::LessOrEqual.to_string(), "<=");
    assert_eq!(Relation::GreaterOrEqual.to_string(), ">=");
}
