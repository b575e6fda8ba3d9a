use crate::{
    expr::{
        dimension::Dimension,
        edge::{Edge, XEdge, YEdge},
    },
    foundation::core::{Anchor, AnchorKind, Attribute, ItemId},
};

fn anchor<K: AnchorKind>(item: ItemId, attribute: Attribute) -> Anchor<K> {
    Anchor::new_unchecked(item, attribute)
}

/// Anything that exposes layout anchors: views and layout guides.
///
/// Implementors provide [`LayoutItem::item_id`]; every accessor derives from it, so repeated
/// calls return equal handles.
pub trait LayoutItem {
    /// Identity the host engine uses for this participant.
    fn item_id(&self) -> ItemId;

    /// Top edge.
    fn top(&self) -> YEdge {
        Edge::new(anchor(self.item_id(), Attribute::Top))
    }

    /// Vertical center line.
    fn center_y(&self) -> YEdge {
        Edge::new(anchor(self.item_id(), Attribute::CenterY))
    }

    /// Bottom edge.
    fn bottom(&self) -> YEdge {
        Edge::new(anchor(self.item_id(), Attribute::Bottom))
    }

    /// Leading edge.
    fn leading(&self) -> XEdge {
        Edge::new(anchor(self.item_id(), Attribute::Leading))
    }

    /// Horizontal center line.
    fn center_x(&self) -> XEdge {
        Edge::new(anchor(self.item_id(), Attribute::CenterX))
    }

    /// Trailing edge.
    fn trailing(&self) -> XEdge {
        Edge::new(anchor(self.item_id(), Attribute::Trailing))
    }

    /// Width.
    fn width(&self) -> Dimension {
        Dimension::new(anchor(self.item_id(), Attribute::Width))
    }

    /// Height.
    fn height(&self) -> Dimension {
        Dimension::new(anchor(self.item_id(), Attribute::Height))
    }
}

/// Anchors only views have: baselines and direction-independent edges.
pub trait ViewItem: LayoutItem {
    /// Baseline of the first line of text.
    fn first_baseline(&self) -> YEdge {
        Edge::new(anchor(self.item_id(), Attribute::FirstBaseline))
    }

    /// Baseline of the last line of text.
    fn last_baseline(&self) -> YEdge {
        Edge::new(anchor(self.item_id(), Attribute::LastBaseline))
    }

    /// Left edge.
    fn left(&self) -> XEdge {
        Edge::new(anchor(self.item_id(), Attribute::Left))
    }

    /// Right edge.
    fn right(&self) -> XEdge {
        Edge::new(anchor(self.item_id(), Attribute::Right))
    }
}

/// Handle to a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct View {
    id: ItemId,
}

impl View {
    /// Wrap a host item id.
    pub fn new(id: ItemId) -> Self {
        Self { id }
    }
}

impl LayoutItem for View {
    fn item_id(&self) -> ItemId {
        self.id
    }
}

impl ViewItem for View {}

/// Handle to a layout guide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Guide {
    id: ItemId,
}

impl Guide {
    /// Wrap a host item id.
    pub fn new(id: ItemId) -> Self {
        Self { id }
    }
}

impl LayoutItem for Guide {
    fn item_id(&self) -> ItemId {
        self.id
    }
}

#[cfg(test)]
#[path = "../../tests/unit/adapter/items.rs"]
mod tests;
