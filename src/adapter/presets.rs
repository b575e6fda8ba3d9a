use kurbo::{Insets, Size};

use crate::{adapter::items::LayoutItem, constraint::model::Constraint};

/// Pin all four edges of `item` inside `container`.
///
/// `insets.x0`/`y0` push the leading and top edges in; `x1`/`y1` pull the trailing and
/// bottom edges in.
pub fn pin_edges(
    item: &impl LayoutItem,
    container: &impl LayoutItem,
    insets: Insets,
) -> Vec<Constraint> {
    vec![
        item.leading().equal_to(container.leading() + insets.x0),
        item.top().equal_to(container.top() + insets.y0),
        item.trailing().equal_to(container.trailing() - insets.x1),
        item.bottom().equal_to(container.bottom() - insets.y1),
    ]
}

/// Align both center lines of `item` with those of `container`.
pub fn center_in(item: &impl LayoutItem, container: &impl LayoutItem) -> Vec<Constraint> {
    vec![
        item.center_x().equal_to(container.center_x()),
        item.center_y().equal_to(container.center_y()),
    ]
}

/// Fix the width and height of `item`.
pub fn size_to(item: &impl LayoutItem, size: Size) -> Vec<Constraint> {
    vec![
        item.width().equal_to(size.width),
        item.height().equal_to(size.height),
    ]
}

/// `width == height * ratio`.
pub fn aspect_ratio(item: &impl LayoutItem, ratio: f64) -> Constraint {
    item.width().equal_to(item.height() * ratio)
}

#[cfg(test)]
#[path = "../../tests/unit/adapter/presets.rs"]
mod tests;
