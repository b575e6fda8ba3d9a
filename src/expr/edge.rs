use std::{
    fmt,
    ops::{Add, Sub},
};

use crate::{
    constraint::model::Constraint,
    expr::anchor::AnchorExpr,
    foundation::core::{Anchor, Axis, Relation, Scalar, XAxis, YAxis},
};

/// Axis façade returned by [`crate::LayoutItem`] accessors.
///
/// Always wraps a bare anchor. Arithmetic leaves the façade and yields an [`AnchorExpr`], so a
/// façade is only ever an operand, never an accumulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge<A> {
    anchor: Anchor<A>,
}

/// Horizontal edge or center line.
pub type XEdge = Edge<XAxis>;
/// Vertical edge, center line or baseline.
pub type YEdge = Edge<YAxis>;

impl<A: Axis> Edge<A> {
    /// Wrap a bare anchor.
    pub fn new(anchor: Anchor<A>) -> Self {
        Self { anchor }
    }

    /// Underlying anchor handle.
    pub fn anchor(self) -> Anchor<A> {
        self.anchor
    }

    /// Unwrap into the equivalent plain expression.
    pub fn expr(self) -> AnchorExpr<A> {
        AnchorExpr::Plain(self.anchor)
    }

    /// `self == rhs`.
    pub fn equal_to(self, rhs: impl Into<AnchorExpr<A>>) -> Constraint {
        self.expr().equal_to(rhs)
    }

    /// `self <= rhs`.
    pub fn less_or_equal(self, rhs: impl Into<AnchorExpr<A>>) -> Constraint {
        self.expr().less_or_equal(rhs)
    }

    /// `self >= rhs`.
    pub fn greater_or_equal(self, rhs: impl Into<AnchorExpr<A>>) -> Constraint {
        self.expr().greater_or_equal(rhs)
    }

    /// `self + k`, as an [`AnchorExpr`].
    pub fn plus(self, k: impl Scalar) -> AnchorExpr<A> {
        self.expr().plus(k)
    }

    /// `self - k`, as an [`AnchorExpr`].
    pub fn minus(self, k: impl Scalar) -> AnchorExpr<A> {
        self.expr().minus(k)
    }
}

impl<A: Axis> From<Edge<A>> for AnchorExpr<A> {
    fn from(edge: Edge<A>) -> Self {
        edge.expr()
    }
}

impl<A: Axis, S: Scalar> Add<S> for Edge<A> {
    type Output = AnchorExpr<A>;

    fn add(self, rhs: S) -> Self::Output {
        self.plus(rhs)
    }
}

impl<A: Axis, S: Scalar> Sub<S> for Edge<A> {
    type Output = AnchorExpr<A>;

    fn sub(self, rhs: S) -> Self::Output {
        self.minus(rhs)
    }
}

macro_rules! impl_scalar_lhs_add {
    ($($t:ty),*) => {
        $(
            impl<A: Axis> Add<Edge<A>> for $t {
                type Output = AnchorExpr<A>;

                fn add(self, rhs: Edge<A>) -> Self::Output {
                    rhs.plus(self)
                }
            }
        )*
    };
}

impl_scalar_lhs_add!(f64, i32);

impl<A: Axis> fmt::Display for Edge<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.anchor, f)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expr/edge.rs"]
mod tests;
