use std::collections::BTreeMap;

use crate::{
    adapter::items::{Guide, View},
    constraint::model::{Constraint, ConstraintId},
    engine::backend::LayoutEngine,
    foundation::{
        core::{AnchorRef, ItemId},
        error::{AnchorageError, AnchorageResult},
    },
};

/// Settings for [`MemoryEngine`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MemoryEngineOpts {
    /// Refuse to re-activate an active constraint under a different priority.
    pub reject_priority_change: bool,
    /// Keep an ordered log of every submission.
    pub record_submissions: bool,
}

impl Default for MemoryEngineOpts {
    fn default() -> Self {
        Self {
            reject_priority_change: true,
            record_submissions: true,
        }
    }
}

/// Kind of participant registered with a [`MemoryEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A view.
    View,
    /// A layout guide.
    Guide,
}

#[derive(Clone, Debug)]
struct ItemRecord {
    name: String,
    kind: ItemKind,
}

/// Direction of one submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionOp {
    /// Constraints were activated.
    Activate,
    /// Constraints were deactivated.
    Deactivate,
}

/// One call into the engine, as recorded in [`MemoryEngine::submissions`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Submission {
    /// Activation or deactivation.
    pub op: SubmissionOp,
    /// Submitted constraints, in submission order.
    pub ids: Vec<ConstraintId>,
}

/// Serializable view of the active set.
#[derive(Clone, Debug, serde::Serialize)]
pub struct EngineSnapshot {
    /// Active constraints, ordered by id.
    pub active: Vec<ConstraintRecord>,
}

/// One active constraint with participant names resolved.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ConstraintRecord {
    /// Constraint data.
    #[serde(flatten)]
    pub constraint: Constraint,
    /// Human-readable form using participant names.
    pub description: String,
}

/// In-process layout engine that tracks the active set without solving it.
///
/// Useful as a stand-in for a host engine in tests and tools, and as the reference for the
/// [`LayoutEngine`] contract.
#[derive(Debug, Default)]
pub struct MemoryEngine {
    opts: MemoryEngineOpts,
    items: BTreeMap<ItemId, ItemRecord>,
    active: BTreeMap<ConstraintId, Constraint>,
    submissions: Vec<Submission>,
}

impl MemoryEngine {
    /// Build an engine with the given settings.
    pub fn new(opts: MemoryEngineOpts) -> Self {
        Self {
            opts,
            ..Self::default()
        }
    }

    /// Current settings.
    pub fn opts(&self) -> &MemoryEngineOpts {
        &self.opts
    }

    /// Register a named view.
    pub fn add_view(&mut self, name: impl Into<String>) -> View {
        View::new(self.register(name.into(), ItemKind::View))
    }

    /// Register a named layout guide.
    pub fn add_guide(&mut self, name: impl Into<String>) -> Guide {
        Guide::new(self.register(name.into(), ItemKind::Guide))
    }

    fn register(&mut self, name: String, kind: ItemKind) -> ItemId {
        let id = ItemId(self.items.len() as u64 + 1);
        self.items.insert(id, ItemRecord { name, kind });
        id
    }

    /// Name a participant was registered under.
    pub fn item_name(&self, id: ItemId) -> Option<&str> {
        self.items.get(&id).map(|r| r.name.as_str())
    }

    /// Kind a participant was registered as.
    pub fn item_kind(&self, id: ItemId) -> Option<ItemKind> {
        self.items.get(&id).map(|r| r.kind)
    }

    /// Whether `constraint` is currently active.
    pub fn is_active(&self, constraint: &Constraint) -> bool {
        self.active.contains_key(&constraint.id())
    }

    /// The engine's copy of an active constraint.
    pub fn active_constraint(&self, id: ConstraintId) -> Option<&Constraint> {
        self.active.get(&id)
    }

    /// Number of active constraints.
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Active constraints, ordered by id.
    pub fn active(&self) -> impl Iterator<Item = &Constraint> {
        self.active.values()
    }

    /// Every submission so far, oldest first. Empty unless `record_submissions` is set.
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    /// Ids in the order they were activated, across all submissions.
    pub fn activation_order(&self) -> Vec<ConstraintId> {
        self.submissions
            .iter()
            .filter(|s| s.op == SubmissionOp::Activate)
            .flat_map(|s| s.ids.iter().copied())
            .collect()
    }

    /// Render a constraint with participant names in place of ids.
    pub fn describe(&self, constraint: &Constraint) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = constraint.write_with(&mut out, |anchor| self.anchor_name(anchor));
        out
    }

    fn anchor_name(&self, anchor: AnchorRef) -> String {
        match self.item_name(anchor.item) {
            Some(name) => format!("{name}.{}", anchor.attribute),
            None => anchor.to_string(),
        }
    }

    /// Capture the active set.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            active: self
                .active
                .values()
                .map(|c| ConstraintRecord {
                    constraint: c.clone(),
                    description: self.describe(c),
                })
                .collect(),
        }
    }

    /// Capture the active set as pretty-printed JSON.
    pub fn snapshot_json(&self) -> AnchorageResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| AnchorageError::serde(e.to_string()))
    }

    fn record(&mut self, op: SubmissionOp, constraints: &[Constraint]) {
        if self.opts.record_submissions {
            self.submissions.push(Submission {
                op,
                ids: constraints.iter().map(Constraint::id).collect(),
            });
        }
    }
}

impl LayoutEngine for MemoryEngine {
    fn activate(&mut self, constraints: &[Constraint]) -> AnchorageResult<()> {
        if self.opts.reject_priority_change {
            for c in constraints {
                if let Some(current) = self.active.get(&c.id())
                    && current.priority() != c.priority()
                {
                    return Err(AnchorageError::engine(format!(
                        "constraint {} is active at {}; its priority cannot change to {}",
                        c.id().0,
                        current.priority(),
                        c.priority()
                    )));
                }
            }
        }

        let mut added = 0usize;
        for c in constraints {
            if !self.active.contains_key(&c.id()) {
                self.active.insert(c.id(), c.clone());
                added += 1;
            }
        }
        tracing::trace!(
            submitted = constraints.len(),
            added,
            active = self.active.len(),
            "activate"
        );
        self.record(SubmissionOp::Activate, constraints);
        Ok(())
    }

    fn deactivate(&mut self, constraints: &[Constraint]) -> AnchorageResult<()> {
        let before = self.active.len();
        for c in constraints {
            self.active.remove(&c.id());
        }
        tracing::trace!(
            submitted = constraints.len(),
            removed = before - self.active.len(),
            active = self.active.len(),
            "deactivate"
        );
        self.record(SubmissionOp::Deactivate, constraints);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/memory.rs"]
mod tests;
