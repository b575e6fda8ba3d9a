//! anchorage turns readable layout-anchor expressions into constraints for a host layout engine.
//!
//! Instead of spelling out each constraint against the engine's primitive:
//!
//! ```text
//! type_label.leading.constraint(equal_to: date_view.trailing, constant: 10)
//! ```
//!
//! a layout reads as the relationship it describes:
//!
//! ```
//! use anchorage::{LayoutItem, MemoryEngine, activate};
//!
//! let mut engine = MemoryEngine::default();
//! let content = engine.add_view("content");
//! let date_view = engine.add_view("date_view");
//! let type_label = engine.add_view("type_label");
//!
//! let mut constraints = vec![
//!     date_view.leading().equal_to(content.leading()),
//!     date_view.width().equal_to(80),
//!     type_label.leading().equal_to(date_view.trailing() + 10),
//!     type_label.height().equal_to(date_view.height() * 0.5),
//! ];
//! activate(&mut engine, &mut constraints, None).unwrap();
//! assert_eq!(engine.active_len(), 4);
//! ```
//!
//! # Pieces
//!
//! 1. **Adapter**: [`LayoutItem`] / [`ViewItem`] expose a participant's edges as [`XEdge`] /
//!    [`YEdge`] and its sizes as [`Dimension`].
//! 2. **Expressions**: `+`/`-` on an edge give an [`AnchorExpr`]; `*`/`/` and `+`/`-` on a
//!    dimension give a [`ScaledDimension`] or an [`OffsetDimension`]. [`DimensionExpr`] is the
//!    runtime-checked equivalent.
//! 3. **Combinators**: `equal_to`, `less_or_equal` and `greater_or_equal` produce a
//!    [`Constraint`].
//! 4. **Batches**: [`ConstraintMap`] groups constraints by [`Priority`] and activates them
//!    against a [`LayoutEngine`], highest priority first.
//!
//! The crate never solves a layout. All calls are synchronous and must stay on the thread
//! that owns the host layout.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod adapter;
mod constraint;
mod engine;
mod expr;
mod foundation;

pub use adapter::items::{Guide, LayoutItem, View, ViewItem};
pub use adapter::presets::{aspect_ratio, center_in, pin_edges, size_to};
pub use constraint::batch::{ConstraintMap, activate, deactivate};
pub use constraint::model::{Constraint, ConstraintId};
pub use engine::backend::LayoutEngine;
pub use engine::memory::{
    ConstraintRecord, EngineSnapshot, ItemKind, MemoryEngine, MemoryEngineOpts, Submission,
    SubmissionOp,
};
pub use expr::anchor::{AnchorExpr, XAnchorExpr, YAnchorExpr};
pub use expr::dimension::{
    Dimension, DimensionExpr, DimensionTarget, OffsetDimension, PlainTarget, ScaledDimension,
};
pub use expr::edge::{Edge, XEdge, YEdge};
pub use foundation::core::{
    Anchor, AnchorKind, AnchorRef, Attribute, Axis, ItemId, Priority, Relation, Scalar, Size,
    XAxis, YAxis,
};
pub use foundation::error::{AnchorageError, AnchorageResult};
