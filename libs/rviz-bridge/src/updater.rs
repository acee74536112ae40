//! # Mesh Updater
//!
//! One update step per engine frame: poll the source, mesh the request,
//! hand the result to the sink. A rejected request leaves the sink's current
//! mesh in place.

use crate::error::BridgeResult;
use crate::sink::MeshSink;
use crate::source::GeometrySource;
use config::constants::GlobalConfig;
use rviz_mesh::GeometryError;
use tracing::{debug, warn};

/// What a single [`MeshUpdater::update`] call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// No new request was waiting.
    Idle,
    /// A mesh with this many vertices was uploaded.
    Uploaded { vertices: usize },
    /// The request was refused; the previous mesh stays on display.
    Rejected(GeometryError),
}

/// Connects a [`GeometrySource`] to a [`MeshSink`].
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// use rviz_bridge::{MeshSlot, MeshUpdater, QueuedSource, ShapeRequest, UpdateOutcome};
/// use rviz_mesh::RigidTransform;
///
/// let mut updater = MeshUpdater::new(QueuedSource::default(), MeshSlot::default(), GlobalConfig::default());
/// updater.source_mut().publish(ShapeRequest::BoundingBox {
///     width: 2.0,
///     height: 4.0,
///     length: 2.0,
///     transform: RigidTransform::IDENTITY,
/// });
/// assert_eq!(updater.update().unwrap(), UpdateOutcome::Uploaded { vertices: 36 });
/// assert_eq!(updater.update().unwrap(), UpdateOutcome::Idle);
/// ```
#[derive(Debug)]
pub struct MeshUpdater<S, K> {
    source: S,
    sink: K,
    config: GlobalConfig,
}

impl<S: GeometrySource, K: MeshSink> MeshUpdater<S, K> {
    pub fn new(source: S, sink: K, config: GlobalConfig) -> Self {
        Self {
            source,
            sink,
            config,
        }
    }

    /// Runs one poll → mesh → upload step.
    ///
    /// # Errors
    ///
    /// Only sink failures are returned as errors. Geometry rejections are
    /// reported through [`UpdateOutcome::Rejected`].
    pub fn update(&mut self) -> BridgeResult<UpdateOutcome> {
        let Some(request) = self.source.poll() else {
            return Ok(UpdateOutcome::Idle);
        };

        let mesh = match request.build(&self.config) {
            Ok(mesh) => mesh,
            Err(err) => {
                warn!(kind = request.kind(), error = %err, "Keeping previous mesh");
                return Ok(UpdateOutcome::Rejected(err));
            }
        };

        let vertices = mesh.vertex_count();
        self.sink.upload(mesh)?;
        debug!(kind = request.kind(), vertices, "Uploaded mesh");

        Ok(UpdateOutcome::Uploaded { vertices })
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// Splits the updater back into its source and sink.
    pub fn into_parts(self) -> (S, K) {
        (self.source, self.sink)
    }
}
