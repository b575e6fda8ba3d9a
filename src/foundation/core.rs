use std::{cmp::Ordering, fmt, marker::PhantomData};

use crate::foundation::error::{AnchorageError, AnchorageResult};

/// Opaque identity of one layout participant (a view or a layout guide).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Named edge, center line, baseline or size of a layout participant.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Vertical center line.
    CenterY,
    /// Baseline of the first line of text.
    FirstBaseline,
    /// Baseline of the last line of text.
    LastBaseline,
    /// Leading edge (left in left-to-right layouts).
    Leading,
    /// Trailing edge (right in left-to-right layouts).
    Trailing,
    /// Left edge, independent of layout direction.
    Left,
    /// Right edge, independent of layout direction.
    Right,
    /// Horizontal center line.
    CenterX,
    /// Width.
    Width,
    /// Height.
    Height,
}

impl Attribute {
    /// Stable lowercase name, used in descriptions.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::CenterY => "center_y",
            Self::FirstBaseline => "first_baseline",
            Self::LastBaseline => "last_baseline",
            Self::Leading => "leading",
            Self::Trailing => "trailing",
            Self::Left => "left",
            Self::Right => "right",
            Self::CenterX => "center_x",
            Self::Width => "width",
            Self::Height => "height",
        }
    }

    /// True for horizontal position attributes.
    pub fn is_x_axis(self) -> bool {
        matches!(
            self,
            Self::Leading | Self::Trailing | Self::Left | Self::Right | Self::CenterX
        )
    }

    /// True for vertical position attributes.
    pub fn is_y_axis(self) -> bool {
        matches!(
            self,
            Self::Top | Self::Bottom | Self::CenterY | Self::FirstBaseline | Self::LastBaseline
        )
    }

    /// True for size attributes.
    pub fn is_size(self) -> bool {
        matches!(self, Self::Width | Self::Height)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Marker for the family an [`Anchor`] belongs to.
pub trait AnchorKind: sealed::Sealed + Copy + fmt::Debug + Eq + std::hash::Hash {
    /// Whether `attribute` may be wrapped in an anchor of this kind.
    fn accepts(attribute: Attribute) -> bool;
}

/// Position axes. Only these anchors take part in [`crate::AnchorExpr`].
pub trait Axis: AnchorKind {}

/// Horizontal position anchors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct XAxis;

/// Vertical position anchors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct YAxis;

/// Size anchors (width and height).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Size;

impl sealed::Sealed for XAxis {}
impl sealed::Sealed for YAxis {}
impl sealed::Sealed for Size {}

impl AnchorKind for XAxis {
    fn accepts(attribute: Attribute) -> bool {
        attribute.is_x_axis()
    }
}

impl AnchorKind for YAxis {
    fn accepts(attribute: Attribute) -> bool {
        attribute.is_y_axis()
    }
}

impl AnchorKind for Size {
    fn accepts(attribute: Attribute) -> bool {
        attribute.is_size()
    }
}

impl Axis for XAxis {}
impl Axis for YAxis {}

/// Type-erased anchor, as stored inside a [`crate::Constraint`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AnchorRef {
    /// Participant owning the anchor.
    pub item: ItemId,
    /// Which edge or dimension of the participant.
    pub attribute: Attribute,
}

impl fmt::Display for AnchorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.item, self.attribute)
    }
}

/// Axis-tagged anchor handle.
///
/// Handles are plain values: two handles for the same participant and attribute compare
/// equal, so repeated retrieval through [`crate::LayoutItem`] is stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Anchor<K> {
    item: ItemId,
    attribute: Attribute,
    kind: PhantomData<K>,
}

impl<K: AnchorKind> Anchor<K> {
    /// Build a handle, checking that `attribute` belongs to the axis `K`.
    pub fn new(item: ItemId, attribute: Attribute) -> AnchorageResult<Self> {
        if !K::accepts(attribute) {
            return Err(AnchorageError::validation(format!(
                "attribute '{attribute}' does not belong to {}",
                std::any::type_name::<K>()
            )));
        }
        Ok(Self::new_unchecked(item, attribute))
    }

    pub(crate) fn new_unchecked(item: ItemId, attribute: Attribute) -> Self {
        debug_assert!(K::accepts(attribute));
        Self {
            item,
            attribute,
            kind: PhantomData,
        }
    }

    /// Participant owning this anchor.
    pub fn item(self) -> ItemId {
        self.item
    }

    /// Edge or dimension this anchor refers to.
    pub fn attribute(self) -> Attribute {
        self.attribute
    }

    /// Drop the axis tag.
    pub fn erase(self) -> AnchorRef {
        AnchorRef {
            item: self.item,
            attribute: self.attribute,
        }
    }
}

impl<K: AnchorKind> fmt::Display for Anchor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.erase(), f)
    }
}

/// Relation between the two sides of a constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// `first == second * multiplier + constant`
    Equal,
    /// `first <= second * multiplier + constant`
    LessOrEqual,
    /// `first >= second * multiplier + constant`
    GreaterOrEqual,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Equal => "==",
            Self::LessOrEqual => "<=",
            Self::GreaterOrEqual => ">=",
        })
    }
}

/// Layout priority in `(0, 1000]`. Only the ordering matters to this crate.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Priority(f32);

impl Priority {
    /// Must be satisfied.
    pub const REQUIRED: Self = Self(1000.0);
    /// Default priority for content compression resistance.
    pub const DEFAULT_HIGH: Self = Self(750.0);
    /// Default priority for content hugging.
    pub const DEFAULT_LOW: Self = Self(250.0);
    /// Priority used when fitting a participant to its smallest size.
    pub const FITTING_SIZE: Self = Self(50.0);

    /// Build a priority, rejecting values outside `(0, 1000]`.
    pub fn new(value: f32) -> AnchorageResult<Self> {
        if !value.is_finite() || value <= 0.0 || value > 1000.0 {
            return Err(AnchorageError::validation(format!(
                "priority must be in (0, 1000], got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Raw priority value.
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether this is [`Priority::REQUIRED`].
    pub fn is_required(self) -> bool {
        self == Self::REQUIRED
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::REQUIRED
    }
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::hash::Hash for Priority {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl TryFrom<f32> for Priority {
    type Error = AnchorageError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Priority> for f32 {
    fn from(value: Priority) -> Self {
        value.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

mod scalar_sealed {
    pub trait Sealed {}
}

/// Numbers accepted as constants and factors. Integers are promoted to `f64`.
pub trait Scalar: scalar_sealed::Sealed + Copy {
    /// Promote to the real type used for constants and multipliers.
    fn to_f64(self) -> f64;
}

macro_rules! impl_scalar {
    ($($t:ty),*) => {
        $(
            impl scalar_sealed::Sealed for $t {}

            impl Scalar for $t {
                fn to_f64(self) -> f64 {
                    f64::from(self)
                }
            }
        )*
    };
}

impl_scalar!(f64, f32, i32, u32);

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
