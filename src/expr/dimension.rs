use std::{
    fmt,
    ops::{Add, Div, Mul, Sub},
};

use crate::{
    constraint::model::Constraint,
    foundation::{
        core::{Anchor, Relation, Scalar, Size},
        error::{AnchorageError, AnchorageResult},
    },
};

/// A size anchor with at most one of an additive constant or a multiplicative factor.
///
/// This is the runtime-checked form: arithmetic goes through `checked_*` and relations
/// through `try_*`, which return [`AnchorageError::Unsupported`] for the shapes the size
/// primitive cannot express. [`Dimension`], [`OffsetDimension`] and [`ScaledDimension`] are
/// the typed form, where those shapes do not type-check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DimensionExpr {
    /// Bare size anchor.
    Plain(Anchor<Size>),
    /// Size anchor plus a constant.
    Offset(Anchor<Size>, f64),
    /// Size anchor times a factor.
    Scaled(Anchor<Size>, f64),
}

impl DimensionExpr {
    /// Underlying anchor handle.
    pub fn anchor(self) -> Anchor<Size> {
        match self {
            Self::Plain(anchor) | Self::Offset(anchor, _) | Self::Scaled(anchor, _) => anchor,
        }
    }

    /// Add a constant. Fails on [`DimensionExpr::Scaled`].
    pub fn checked_add(self, k: impl Scalar) -> AnchorageResult<Self> {
        let k = k.to_f64();
        match self {
            Self::Plain(anchor) => Ok(Self::Offset(anchor, k)),
            Self::Offset(anchor, constant) => Ok(Self::Offset(anchor, constant + k)),
            Self::Scaled(..) => Err(mixed(self, "+", k)),
        }
    }

    /// Subtract a constant. Fails on [`DimensionExpr::Scaled`].
    pub fn checked_sub(self, k: impl Scalar) -> AnchorageResult<Self> {
        let k = k.to_f64();
        match self {
            Self::Plain(anchor) => Ok(Self::Offset(anchor, -k)),
            Self::Offset(anchor, constant) => Ok(Self::Offset(anchor, constant - k)),
            Self::Scaled(..) => Err(mixed(self, "-", k)),
        }
    }

    /// Multiply by a factor. Fails on [`DimensionExpr::Offset`].
    pub fn checked_mul(self, m: impl Scalar) -> AnchorageResult<Self> {
        let m = m.to_f64();
        match self {
            Self::Plain(anchor) => Ok(Self::Scaled(anchor, m)),
            Self::Scaled(anchor, factor) => Ok(Self::Scaled(anchor, factor * m)),
            Self::Offset(..) => Err(mixed(self, "*", m)),
        }
    }

    /// Divide by a factor. Fails on [`DimensionExpr::Offset`].
    pub fn checked_div(self, m: impl Scalar) -> AnchorageResult<Self> {
        let m = m.to_f64();
        match self {
            Self::Plain(anchor) => Ok(Self::Scaled(anchor, 1.0 / m)),
            Self::Scaled(anchor, factor) => Ok(Self::Scaled(anchor, factor / m)),
            Self::Offset(..) => Err(mixed(self, "/", m)),
        }
    }

    /// `self == rhs`, failing when both sides carry a constant or factor.
    pub fn try_equal_to(self, rhs: impl Into<DimensionTarget>) -> AnchorageResult<Constraint> {
        relate_checked(self, Relation::Equal, rhs.into())
    }

    /// `self <= rhs`, failing when both sides carry a constant or factor.
    pub fn try_less_or_equal(
        self,
        rhs: impl Into<DimensionTarget>,
    ) -> AnchorageResult<Constraint> {
        relate_checked(self, Relation::LessOrEqual, rhs.into())
    }

    /// `self >= rhs`, failing when both sides carry a constant or factor.
    pub fn try_greater_or_equal(
        self,
        rhs: impl Into<DimensionTarget>,
    ) -> AnchorageResult<Constraint> {
        relate_checked(self, Relation::GreaterOrEqual, rhs.into())
    }
}

fn mixed(expr: DimensionExpr, op: &str, k: f64) -> AnchorageError {
    AnchorageError::unsupported(format!(
        "`{expr} {op} {k}`: a dimension cannot carry both a constant and a multiplier"
    ))
}

impl fmt::Display for DimensionExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(anchor) => write!(f, "{anchor}"),
            Self::Offset(anchor, constant) => write!(f, "{anchor} + {constant}"),
            Self::Scaled(anchor, factor) => write!(f, "{anchor} * {factor}"),
        }
    }
}

/// Right-hand side of a relation whose left side is a bare dimension.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DimensionTarget {
    /// Another dimension expression of any shape.
    Expr(DimensionExpr),
    /// A fixed size.
    Constant(f64),
}

/// Right-hand side of a relation whose left side carries a constant or factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlainTarget {
    /// A bare dimension.
    Dimension(Anchor<Size>),
    /// A fixed size.
    Constant(f64),
}

/// Bare size anchor, as returned by [`crate::LayoutItem::width`] and
/// [`crate::LayoutItem::height`].
///
/// Multiplying yields a [`ScaledDimension`], adding yields an [`OffsetDimension`]; neither of
/// those accepts the other kind of arithmetic:
///
/// ```compile_fail
/// use anchorage::{LayoutItem, View, ItemId};
///
/// let view = View::new(ItemId(1));
/// let _ = (view.width() + 5) * 2;
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimension {
    anchor: Anchor<Size>,
}

impl Dimension {
    /// Wrap a bare size anchor.
    pub fn new(anchor: Anchor<Size>) -> Self {
        Self { anchor }
    }

    /// Underlying anchor handle.
    pub fn anchor(self) -> Anchor<Size> {
        self.anchor
    }

    /// `self + k`.
    pub fn plus(self, k: impl Scalar) -> OffsetDimension {
        OffsetDimension {
            anchor: self.anchor,
            constant: k.to_f64(),
        }
    }

    /// `self - k`.
    pub fn minus(self, k: impl Scalar) -> OffsetDimension {
        OffsetDimension {
            anchor: self.anchor,
            constant: -k.to_f64(),
        }
    }

    /// `self * m`.
    pub fn times(self, m: impl Scalar) -> ScaledDimension {
        ScaledDimension {
            anchor: self.anchor,
            factor: m.to_f64(),
        }
    }

    /// `self / m`.
    pub fn divided_by(self, m: impl Scalar) -> ScaledDimension {
        ScaledDimension {
            anchor: self.anchor,
            factor: 1.0 / m.to_f64(),
        }
    }

    /// `self == rhs`, where `rhs` is any dimension expression or a fixed size.
    pub fn equal_to(self, rhs: impl Into<DimensionTarget>) -> Constraint {
        relate_from_plain(self.anchor, Relation::Equal, rhs.into())
    }

    /// `self <= rhs`, where `rhs` is any dimension expression or a fixed size.
    pub fn less_or_equal(self, rhs: impl Into<DimensionTarget>) -> Constraint {
        relate_from_plain(self.anchor, Relation::LessOrEqual, rhs.into())
    }

    /// `self >= rhs`, where `rhs` is any dimension expression or a fixed size.
    pub fn greater_or_equal(self, rhs: impl Into<DimensionTarget>) -> Constraint {
        relate_from_plain(self.anchor, Relation::GreaterOrEqual, rhs.into())
    }
}

/// Size anchor plus a constant. Only further additive arithmetic is available.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetDimension {
    anchor: Anchor<Size>,
    constant: f64,
}

impl OffsetDimension {
    /// Underlying anchor handle.
    pub fn anchor(self) -> Anchor<Size> {
        self.anchor
    }

    /// Accumulated constant.
    pub fn constant(self) -> f64 {
        self.constant
    }

    /// `self + k`.
    pub fn plus(self, k: impl Scalar) -> Self {
        Self {
            constant: self.constant + k.to_f64(),
            ..self
        }
    }

    /// `self - k`.
    pub fn minus(self, k: impl Scalar) -> Self {
        Self {
            constant: self.constant - k.to_f64(),
            ..self
        }
    }

    /// `self == rhs`, where `rhs` is a bare dimension or a fixed size.
    pub fn equal_to(self, rhs: impl Into<PlainTarget>) -> Constraint {
        relate_to_plain(self.into(), Relation::Equal, rhs.into())
    }

    /// `self <= rhs`, where `rhs` is a bare dimension or a fixed size.
    pub fn less_or_equal(self, rhs: impl Into<PlainTarget>) -> Constraint {
        relate_to_plain(self.into(), Relation::LessOrEqual, rhs.into())
    }

    /// `self >= rhs`, where `rhs` is a bare dimension or a fixed size.
    pub fn greater_or_equal(self, rhs: impl Into<PlainTarget>) -> Constraint {
        relate_to_plain(self.into(), Relation::GreaterOrEqual, rhs.into())
    }
}

/// Size anchor times a factor. Only further multiplicative arithmetic is available.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaledDimension {
    anchor: Anchor<Size>,
    factor: f64,
}

impl ScaledDimension {
    /// Underlying anchor handle.
    pub fn anchor(self) -> Anchor<Size> {
        self.anchor
    }

    /// Accumulated factor.
    pub fn factor(self) -> f64 {
        self.factor
    }

    /// `self * m`.
    pub fn times(self, m: impl Scalar) -> Self {
        Self {
            factor: self.factor * m.to_f64(),
            ..self
        }
    }

    /// `self / m`.
    pub fn divided_by(self, m: impl Scalar) -> Self {
        Self {
            factor: self.factor / m.to_f64(),
            ..self
        }
    }

    /// `self == rhs`, where `rhs` is a bare dimension or a fixed size.
    pub fn equal_to(self, rhs: impl Into<PlainTarget>) -> Constraint {
        relate_to_plain(self.into(), Relation::Equal, rhs.into())
    }

    /// `self <= rhs`, where `rhs` is a bare dimension or a fixed size.
    pub fn less_or_equal(self, rhs: impl Into<PlainTarget>) -> Constraint {
        relate_to_plain(self.into(), Relation::LessOrEqual, rhs.into())
    }

    /// `self >= rhs`, where `rhs` is a bare dimension or a fixed size.
    pub fn greater_or_equal(self, rhs: impl Into<PlainTarget>) -> Constraint {
        relate_to_plain(self.into(), Relation::GreaterOrEqual, rhs.into())
    }
}

fn relate_from_plain(a: Anchor<Size>, relation: Relation, rhs: DimensionTarget) -> Constraint {
    match rhs {
        DimensionTarget::Constant(k) => a.constraint_to_constant(relation, k),
        DimensionTarget::Expr(DimensionExpr::Plain(b)) => a.constraint_offset(relation, b, 0.0),
        DimensionTarget::Expr(DimensionExpr::Scaled(b, m)) => a.constraint_scaled(relation, b, m),
        DimensionTarget::Expr(DimensionExpr::Offset(b, c)) => a.constraint_offset(relation, b, c),
    }
}

// The multiplier stays on the right-hand anchor, so a left-hand factor is inverted and a
// left-hand constant negated.
fn relate_to_plain(lhs: DimensionExpr, relation: Relation, rhs: PlainTarget) -> Constraint {
    match (lhs, rhs) {
        (lhs, PlainTarget::Constant(k)) => relate_to_constant(lhs, relation, k),
        (DimensionExpr::Plain(a), PlainTarget::Dimension(b)) => {
            a.constraint_offset(relation, b, 0.0)
        }
        (DimensionExpr::Scaled(a, m), PlainTarget::Dimension(b)) => {
            a.constraint_scaled(relation, b, 1.0 / m)
        }
        (DimensionExpr::Offset(a, c), PlainTarget::Dimension(b)) => {
            a.constraint_offset(relation, b, -c)
        }
    }
}

fn relate_to_constant(lhs: DimensionExpr, relation: Relation, k: f64) -> Constraint {
    match lhs {
        DimensionExpr::Plain(a) => a.constraint_to_constant(relation, k),
        DimensionExpr::Scaled(a, m) => a.constraint_to_constant(relation, k / m),
        DimensionExpr::Offset(a, c) => a.constraint_to_constant(relation, c - k),
    }
}

fn relate_checked(
    lhs: DimensionExpr,
    relation: Relation,
    rhs: DimensionTarget,
) -> AnchorageResult<Constraint> {
    match (lhs, rhs) {
        (DimensionExpr::Plain(a), rhs) => Ok(relate_from_plain(a, relation, rhs)),
        (lhs, DimensionTarget::Constant(k)) => Ok(relate_to_constant(lhs, relation, k)),
        (lhs, DimensionTarget::Expr(DimensionExpr::Plain(b))) => Ok(relate_to_plain(
            lhs,
            relation,
            PlainTarget::Dimension(b),
        )),
        (lhs, DimensionTarget::Expr(rhs)) => Err(AnchorageError::unsupported(format!(
            "`{lhs} {relation} {rhs}`: both sides carry a constant or multiplier"
        ))),
    }
}

impl From<Anchor<Size>> for DimensionExpr {
    fn from(anchor: Anchor<Size>) -> Self {
        Self::Plain(anchor)
    }
}

impl From<Dimension> for DimensionExpr {
    fn from(d: Dimension) -> Self {
        Self::Plain(d.anchor)
    }
}

impl From<OffsetDimension> for DimensionExpr {
    fn from(d: OffsetDimension) -> Self {
        Self::Offset(d.anchor, d.constant)
    }
}

impl From<ScaledDimension> for DimensionExpr {
    fn from(d: ScaledDimension) -> Self {
        Self::Scaled(d.anchor, d.factor)
    }
}

impl From<DimensionExpr> for DimensionTarget {
    fn from(expr: DimensionExpr) -> Self {
        Self::Expr(expr)
    }
}

impl From<Dimension> for DimensionTarget {
    fn from(d: Dimension) -> Self {
        Self::Expr(d.into())
    }
}

impl From<OffsetDimension> for DimensionTarget {
    fn from(d: OffsetDimension) -> Self {
        Self::Expr(d.into())
    }
}

impl From<ScaledDimension> for DimensionTarget {
    fn from(d: ScaledDimension) -> Self {
        Self::Expr(d.into())
    }
}

impl<S: Scalar> From<S> for DimensionTarget {
    fn from(k: S) -> Self {
        Self::Constant(k.to_f64())
    }
}

impl From<Dimension> for PlainTarget {
    fn from(d: Dimension) -> Self {
        Self::Dimension(d.anchor)
    }
}

impl<S: Scalar> From<S> for PlainTarget {
    fn from(k: S) -> Self {
        Self::Constant(k.to_f64())
    }
}

impl<S: Scalar> Add<S> for Dimension {
    type Output = OffsetDimension;

    fn add(self, rhs: S) -> Self::Output {
        self.plus(rhs)
    }
}

impl<S: Scalar> Sub<S> for Dimension {
    type Output = OffsetDimension;

    fn sub(self, rhs: S) -> Self::Output {
        self.minus(rhs)
    }
}

impl<S: Scalar> Mul<S> for Dimension {
    type Output = ScaledDimension;

    fn mul(self, rhs: S) -> Self::Output {
        self.times(rhs)
    }
}

impl<S: Scalar> Div<S> for Dimension {
    type Output = ScaledDimension;

    fn div(self, rhs: S) -> Self::Output {
        self.divided_by(rhs)
    }
}

impl<S: Scalar> Add<S> for OffsetDimension {
    type Output = OffsetDimension;

    fn add(self, rhs: S) -> Self::Output {
        self.plus(rhs)
    }
}

impl<S: Scalar> Sub<S> for OffsetDimension {
    type Output = OffsetDimension;

    fn sub(self, rhs: S) -> Self::Output {
        self.minus(rhs)
    }
}

impl<S: Scalar> Mul<S> for ScaledDimension {
    type Output = ScaledDimension;

    fn mul(self, rhs: S) -> Self::Output {
        self.times(rhs)
    }
}

impl<S: Scalar> Div<S> for ScaledDimension {
    type Output = ScaledDimension;

    fn div(self, rhs: S) -> Self::Output {
        self.divided_by(rhs)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&DimensionExpr::from(*self), f)
    }
}

impl fmt::Display for OffsetDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&DimensionExpr::from(*self), f)
    }
}

impl fmt::Display for ScaledDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&DimensionExpr::from(*self), f)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expr/dimension.rs"]
mod tests;
