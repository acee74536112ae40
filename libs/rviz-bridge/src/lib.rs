//! Engine-facing boundary of the rviz viewer bridge.
//!
//! The host engine owns subscriptions and GPU resources. This crate defines
//! the two capabilities it must provide, a [`GeometrySource`] of shape
//! requests and a [`MeshSink`] for finished meshes, and the
//! [`MeshUpdater`] step that drives [`rviz_mesh`] between them.
//!
//! ```
//! use config::constants::GlobalConfig;
//! use rviz_bridge::{MeshSlot, MeshUpdater, QueuedSource, UpdateOutcome};
//!
//! let mut updater = MeshUpdater::new(QueuedSource::default(), MeshSlot::default(), GlobalConfig::default());
//! assert_eq!(updater.update().unwrap(), UpdateOutcome::Idle);
//! ```

mod error;
mod request;
mod sink;
mod source;
mod updater;

pub use error::{BridgeError, BridgeResult};
pub use request::ShapeRequest;
pub use sink::{MeshSink, MeshSlot};
pub use source::{GeometrySource, QueuedSource};
pub use updater::{MeshUpdater, UpdateOutcome};
