use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::foundation::core::{Anchor, AnchorRef, Axis, Priority, Relation, Size};

static NEXT_CONSTRAINT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a constraint object. Engines key their active set on it.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ConstraintId(pub u64);

impl ConstraintId {
    fn next() -> Self {
        Self(NEXT_CONSTRAINT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// One linear layout relationship:
/// `first <relation> second * multiplier + constant`, or `first <relation> constant`
/// when there is no second anchor.
///
/// Built by the anchor primitives and the expression combinators; cloning keeps the id, so a
/// clone refers to the same constraint object.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Constraint {
    id: ConstraintId,
    first: AnchorRef,
    relation: Relation,
    second: Option<AnchorRef>,
    multiplier: f64,
    constant: f64,
    priority: Priority,
}

impl Constraint {
    fn new(
        first: AnchorRef,
        relation: Relation,
        second: Option<AnchorRef>,
        multiplier: f64,
        constant: f64,
    ) -> Self {
        Self {
            id: ConstraintId::next(),
            first,
            relation,
            second,
            multiplier,
            constant,
            priority: Priority::REQUIRED,
        }
    }

    /// Identity of this constraint.
    pub fn id(&self) -> ConstraintId {
        self.id
    }

    /// Left-hand anchor.
    pub fn first(&self) -> AnchorRef {
        self.first
    }

    /// Relation between the two sides.
    pub fn relation(&self) -> Relation {
        self.relation
    }

    /// Right-hand anchor, absent for constant-size constraints.
    pub fn second(&self) -> Option<AnchorRef> {
        self.second
    }

    /// Factor applied to the right-hand anchor.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Additive constant on the right-hand side.
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Current priority. New constraints are [`Priority::REQUIRED`].
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Tag with a priority. Engines hold their own copy once a constraint is activated, so
    /// tagging must happen before submission.
    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Builder form of [`Constraint::set_priority`].
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Compare everything but the identity.
    pub fn same_relationship(&self, other: &Constraint) -> bool {
        self.first == other.first
            && self.relation == other.relation
            && self.second == other.second
            && self.multiplier == other.multiplier
            && self.constant == other.constant
            && self.priority == other.priority
    }

    /// Write the equation form, rendering anchors through `anchor_name`.
    pub(crate) fn write_with(
        &self,
        out: &mut impl fmt::Write,
        anchor_name: impl Fn(AnchorRef) -> String,
    ) -> fmt::Result {
        write!(out, "{} {} ", anchor_name(self.first), self.relation)?;
        match self.second {
            Some(second) => {
                out.write_str(&anchor_name(second))?;
                if self.multiplier != 1.0 {
                    write!(out, " * {}", self.multiplier)?;
                }
                if self.constant > 0.0 {
                    write!(out, " + {}", self.constant)?;
                } else if self.constant < 0.0 {
                    write!(out, " - {}", -self.constant)?;
                }
            }
            None => write!(out, "{}", self.constant)?,
        }
        write!(out, " {}", self.priority)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, |anchor| anchor.to_string())
    }
}

impl<A: Axis> Anchor<A> {
    /// Position primitive: `self <relation> other + constant`.
    pub fn constraint(self, relation: Relation, other: Anchor<A>, constant: f64) -> Constraint {
        Constraint::new(self.erase(), relation, Some(other.erase()), 1.0, constant)
    }
}

impl Anchor<Size> {
    /// Size primitive with a constant: `self <relation> other + constant`.
    pub fn constraint_offset(
        self,
        relation: Relation,
        other: Anchor<Size>,
        constant: f64,
    ) -> Constraint {
        Constraint::new(self.erase(), relation, Some(other.erase()), 1.0, constant)
    }

    /// Size primitive with a multiplier: `self <relation> other * multiplier`.
    pub fn constraint_scaled(
        self,
        relation: Relation,
        other: Anchor<Size>,
        multiplier: f64,
    ) -> Constraint {
        Constraint::new(self.erase(), relation, Some(other.erase()), multiplier, 0.0)
    }

    /// Size primitive against a fixed value: `self <relation> constant`.
    pub fn constraint_to_constant(self, relation: Relation, constant: f64) -> Constraint {
        Constraint::new(self.erase(), relation, None, 1.0, constant)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/constraint/model.rs"]
mod tests;
