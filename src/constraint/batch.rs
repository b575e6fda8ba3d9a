use std::{
    collections::{BTreeMap, btree_map::Entry},
    ops::Add,
};

use crate::{
    constraint::model::Constraint,
    engine::backend::LayoutEngine,
    foundation::{core::Priority, error::AnchorageResult},
};

/// Constraints grouped by priority, activated highest priority first.
///
/// ```
/// use anchorage::{ConstraintMap, LayoutItem, MemoryEngine, Priority};
///
/// let mut engine = MemoryEngine::default();
/// let content = engine.add_view("content");
/// let label = engine.add_view("label");
///
/// let mut map = ConstraintMap::from([
///     (Priority::REQUIRED, vec![label.top().equal_to(content.top())]),
///     (Priority::DEFAULT_LOW, vec![label.leading().greater_or_equal(content.leading() + 10)]),
/// ]);
/// map.activate(&mut engine).unwrap();
/// assert_eq!(engine.active_len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConstraintMap {
    groups: BTreeMap<Priority, Vec<Constraint>>,
}

impl ConstraintMap {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `constraints` under `priority`.
    pub fn insert(
        &mut self,
        priority: Priority,
        constraints: impl IntoIterator<Item = Constraint>,
    ) {
        self.groups.entry(priority).or_default().extend(constraints);
    }

    /// Builder form of [`ConstraintMap::insert`].
    pub fn with(
        mut self,
        priority: Priority,
        constraints: impl IntoIterator<Item = Constraint>,
    ) -> Self {
        self.insert(priority, constraints);
        self
    }

    /// Constraints stored under `priority`.
    pub fn get(&self, priority: Priority) -> Option<&[Constraint]> {
        self.groups.get(&priority).map(Vec::as_slice)
    }

    /// Priorities present, highest first.
    pub fn priorities(&self) -> impl Iterator<Item = Priority> + '_ {
        self.groups.keys().rev().copied()
    }

    /// Groups, highest priority first.
    pub fn iter(&self) -> impl Iterator<Item = (Priority, &[Constraint])> {
        self.groups.iter().rev().map(|(p, v)| (*p, v.as_slice()))
    }

    /// Total number of constraints across all groups.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// True when no group holds a constraint.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Combine two maps. Under a priority both maps hold, `other`'s constraints come first,
    /// followed by `self`'s.
    pub fn merge(mut self, other: ConstraintMap) -> ConstraintMap {
        for (priority, mut incoming) in other.groups {
            match self.groups.entry(priority) {
                Entry::Occupied(mut e) => {
                    incoming.append(e.get_mut());
                    *e.get_mut() = incoming;
                }
                Entry::Vacant(e) => {
                    e.insert(incoming);
                }
            }
        }
        self
    }

    /// Tag and activate each group, highest priority first.
    ///
    /// Every constraint in a group receives the group's priority before the group is
    /// submitted. Stops at the first engine error; groups already submitted stay active.
    #[tracing::instrument(skip_all, fields(groups = self.groups.len(), constraints = self.len()))]
    pub fn activate<E: LayoutEngine + ?Sized>(&mut self, engine: &mut E) -> AnchorageResult<()> {
        for (priority, constraints) in self.groups.iter_mut().rev() {
            if constraints.is_empty() {
                continue;
            }
            tag(constraints, *priority);
            tracing::debug!(%priority, count = constraints.len(), "activating group");
            engine.activate(constraints)?;
        }
        Ok(())
    }

    /// Deactivate every group. Order across groups is unspecified.
    #[tracing::instrument(skip_all, fields(groups = self.groups.len(), constraints = self.len()))]
    pub fn deactivate<E: LayoutEngine + ?Sized>(&self, engine: &mut E) -> AnchorageResult<()> {
        for (priority, constraints) in &self.groups {
            if constraints.is_empty() {
                continue;
            }
            tracing::debug!(%priority, count = constraints.len(), "deactivating group");
            engine.deactivate(constraints)?;
        }
        Ok(())
    }
}

impl Add for ConstraintMap {
    type Output = ConstraintMap;

    fn add(self, rhs: ConstraintMap) -> Self::Output {
        self.merge(rhs)
    }
}

impl FromIterator<(Priority, Vec<Constraint>)> for ConstraintMap {
    fn from_iter<I: IntoIterator<Item = (Priority, Vec<Constraint>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (priority, constraints) in iter {
            map.insert(priority, constraints);
        }
        map
    }
}

impl<const N: usize> From<[(Priority, Vec<Constraint>); N]> for ConstraintMap {
    fn from(groups: [(Priority, Vec<Constraint>); N]) -> Self {
        groups.into_iter().collect()
    }
}

impl IntoIterator for ConstraintMap {
    type Item = (Priority, Vec<Constraint>);
    type IntoIter = std::iter::Rev<std::collections::btree_map::IntoIter<Priority, Vec<Constraint>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter().rev()
    }
}

fn tag(constraints: &mut [Constraint], priority: Priority) {
    for c in constraints {
        c.set_priority(priority);
    }
}

/// Activate a flat list, tagging every constraint with `priority` first when one is given.
#[tracing::instrument(skip(engine, constraints), fields(count = constraints.len()))]
pub fn activate<E: LayoutEngine + ?Sized>(
    engine: &mut E,
    constraints: &mut [Constraint],
    priority: Option<Priority>,
) -> AnchorageResult<()> {
    if let Some(priority) = priority {
        tag(constraints, priority);
    }
    engine.activate(constraints)
}

/// Deactivate a flat list.
#[tracing::instrument(skip_all, fields(count = constraints.len()))]
pub fn deactivate<E: LayoutEngine + ?Sized>(
    engine: &mut E,
    constraints: &[Constraint],
) -> AnchorageResult<()> {
    engine.deactivate(constraints)
}

#[cfg(test)]
#[path = "../../tests/unit/constraint/batch.rs"]
mod tests;
