//! Upstream side of the bridge: where shape requests come from.

use crate::request::ShapeRequest;

/// Feed of shape requests driven by an external cadence.
///
/// Implementations wrap a middleware subscription. `poll` hands out the
/// latest request only once; until new data arrives it returns `None`.
///
/// # Examples
/// ```
/// use rviz_bridge::{GeometrySource, QueuedSource};
/// let mut source = QueuedSource::default();
/// assert!(source.poll().is_none());
/// ```
pub trait GeometrySource {
    /// Takes the newest unseen request, if any.
    fn poll(&mut self) -> Option<ShapeRequest>;
}

/// In-memory source keeping only the most recent request, like a
/// keep-last-1 subscription.
///
/// # Examples
/// ```
/// use rviz_bridge::{GeometrySource, QueuedSource, ShapeRequest};
/// use rviz_mesh::RigidTransform;
///
/// let mut source = QueuedSource::default();
/// source.publish(ShapeRequest::Cylinder { radius: 1.0, height: 1.0, transform: RigidTransform::IDENTITY });
/// assert!(source.is_new());
/// assert!(source.poll().is_some());
/// assert!(!source.is_new());
/// ```
#[derive(Debug, Default, Clone)]
pub struct QueuedSource {
    latest: Option<ShapeRequest>,
}

impl QueuedSource {
    /// Stores `request`, replacing any request not yet polled.
    pub fn publish(&mut self, request: ShapeRequest) {
        self.latest = Some(request);
    }

    /// Returns true if a request is waiting to be polled.
    pub fn is_new(&self) -> bool {
        self.latest.is_some()
    }
}

impl GeometrySource for QueuedSource {
    fn poll(&mut self) -> Option<ShapeRequest> {
        self.latest.take()
    }
}
