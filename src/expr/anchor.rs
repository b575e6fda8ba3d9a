use std::{
    fmt,
    ops::{Add, Sub},
};

use crate::{
    constraint::model::Constraint,
    foundation::core::{Anchor, Axis, Relation, Scalar, XAxis, YAxis},
};

/// A position anchor, optionally offset by an additive constant.
///
/// `Offset(a, c)` on the left of a relation contributes `-c`, on the right `+c`:
/// relating `a + c1` to `b + c2` builds `a.constraint(b, c2 - c1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnchorExpr<A> {
    /// Bare anchor.
    Plain(Anchor<A>),
    /// Anchor plus an accumulated constant.
    Offset(Anchor<A>, f64),
}

impl<A: Axis> AnchorExpr<A> {
    /// Underlying anchor handle.
    pub fn anchor(self) -> Anchor<A> {
        match self {
            Self::Plain(anchor) | Self::Offset(anchor, _) => anchor,
        }
    }

    /// Accumulated constant, zero for [`AnchorExpr::Plain`].
    pub fn constant(self) -> f64 {
        match self {
            Self::Plain(_) => 0.0,
            Self::Offset(_, constant) => constant,
        }
    }

    /// `self + k`. The result is always [`AnchorExpr::Offset`].
    pub fn plus(self, k: impl Scalar) -> Self {
        let k = k.to_f64();
        match self {
            Self::Plain(anchor) => Self::Offset(anchor, k),
            Self::Offset(anchor, constant) => Self::Offset(anchor, constant + k),
        }
    }

    /// `self - k`. The result is always [`AnchorExpr::Offset`].
    pub fn minus(self, k: impl Scalar) -> Self {
        let k = k.to_f64();
        match self {
            Self::Plain(anchor) => Self::Offset(anchor, -k),
            Self::Offset(anchor, constant) => Self::Offset(anchor, constant - k),
        }
    }

    /// `self == rhs`.
    pub fn equal_to(self, rhs: impl Into<AnchorExpr<A>>) -> Constraint {
        self.relate(Relation::Equal, rhs.into())
    }

    /// `self <= rhs`.
    pub fn less_or_equal(self, rhs: impl Into<AnchorExpr<A>>) -> Constraint {
        self.relate(Relation::LessOrEqual, rhs.into())
    }

    /// `self >= rhs`.
    pub fn greater_or_equal(self, rhs: impl Into<AnchorExpr<A>>) -> Constraint {
        self.relate(Relation::GreaterOrEqual, rhs.into())
    }

    /// Build a constraint with an explicit relation.
    pub fn relate(self, relation: Relation, rhs: AnchorExpr<A>) -> Constraint {
        match (self, rhs) {
            (Self::Plain(a), Self::Plain(b)) => a.constraint(relation, b, 0.0),
            (Self::Plain(a), Self::Offset(b, constant)) => a.constraint(relation, b, constant),
            (Self::Offset(a, constant), Self::Plain(b)) => a.constraint(relation, b, -constant),
            (Self::Offset(a, c1), Self::Offset(b, c2)) => a.constraint(relation, b, c2 - c1),
        }
    }
}

impl<A: Axis> From<Anchor<A>> for AnchorExpr<A> {
    fn from(anchor: Anchor<A>) -> Self {
        Self::Plain(anchor)
    }
}

impl<A: Axis, S: Scalar> Add<S> for AnchorExpr<A> {
    type Output = AnchorExpr<A>;

    fn add(self, rhs: S) -> Self::Output {
        self.plus(rhs)
    }
}

impl<A: Axis, S: Scalar> Sub<S> for AnchorExpr<A> {
    type Output = AnchorExpr<A>;

    fn sub(self, rhs: S) -> Self::Output {
        self.minus(rhs)
    }
}

// `k + expr`; one impl per scalar type since the left operand is foreign.
macro_rules! impl_scalar_lhs_add {
    ($($t:ty),*) => {
        $(
            impl<A: Axis> Add<AnchorExpr<A>> for $t {
                type Output = AnchorExpr<A>;

                fn add(self, rhs: AnchorExpr<A>) -> Self::Output {
                    rhs.plus(self)
                }
            }
        )*
    };
}

impl_scalar_lhs_add!(f64, i32);

impl<A: Axis> fmt::Display for AnchorExpr<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(anchor) => write!(f, "{anchor}"),
            Self::Offset(anchor, constant) => write!(f, "{anchor} + {constant}"),
        }
    }
}

/// Horizontal position expression.
pub type XAnchorExpr = AnchorExpr<XAxis>;
/// Vertical position expression.
pub type YAnchorExpr = AnchorExpr<YAxis>;

#[cfg(test)]
#[path = "../../tests/unit/expr/anchor.rs"]
mod tests;
