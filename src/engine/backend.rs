use crate::{constraint::model::Constraint, foundation::error::AnchorageResult};

/// Host layout engine boundary: bulk activation and deactivation of constraints.
///
/// Implementations own their copy of each activated constraint, keyed by
/// [`Constraint::id`]. Activating an already-active constraint must leave the active set
/// unchanged.
///
/// Calls are not synchronized. Callers must keep every call on the thread that owns the
/// layout (normally the UI thread); nothing in this crate enforces that.
pub trait LayoutEngine {
    /// Add `constraints` to the active set, in order.
    fn activate(&mut self, constraints: &[Constraint]) -> AnchorageResult<()>;

    /// Remove `constraints` from the active set. Inactive ones are ignored.
    fn deactivate(&mut self, constraints: &[Constraint]) -> AnchorageResult<()>;
}

impl<E: LayoutEngine + ?Sized> LayoutEngine for &mut E {
    fn activate(&mut self, constraints: &[Constraint]) -> AnchorageResult<()> {
        (**self).activate(constraints)
    }

    fn deactivate(&mut self, constraints: &[Constraint]) -> AnchorageResult<()> {
        (**self).deactivate(constraints)
    }
}

impl<E: LayoutEngine + ?Sized> LayoutEngine for Box<E> {
    fn activate(&mut self, constraints: &[Constraint]) -> AnchorageResult<()> {
        (**self).activate(constraints)
    }

    fn deactivate(&mut self, constraints: &[Constraint]) -> AnchorageResult<()> {
        (**self).deactivate(constraints)
    }
}
