//! Downstream side of the bridge: where finished meshes go.

use crate::error::{BridgeError, BridgeResult};
use rviz_mesh::Mesh;

/// Engine surface that accepts finished meshes.
///
/// The host implementation owns the GPU resource and its lifecycle,
/// including double-buffering against frames still in flight and any
/// normal re-normalization its lighting needs.
pub trait MeshSink {
    /// Replaces the displayed mesh with `mesh`.
    fn upload(&mut self, mesh: Mesh) -> BridgeResult<()>;
}

/// In-memory sink holding the most recently uploaded mesh.
///
/// # Examples
/// ```
/// use rviz_bridge::{MeshSink, MeshSlot};
/// use rviz_mesh::Mesh;
///
/// let mut slot = MeshSlot::default();
/// slot.upload(Mesh::new()).unwrap();
/// assert_eq!(slot.generation(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct MeshSlot {
    current: Option<Mesh>,
    generation: u64,
    closed: bool,
}

impl MeshSlot {
    /// Mesh currently on display.
    pub fn current(&self) -> Option<&Mesh> {
        self.current.as_ref()
    }

    /// Number of successful uploads so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Releases the slot; later uploads fail with [`BridgeError::SinkClosed`].
    pub fn close(&mut self) {
        self.closed = true;
        self.current = None;
    }
}

impl MeshSink for MeshSlot {
    fn upload(&mut self, mesh: Mesh) -> BridgeResult<()> {
        if self.closed {
            return Err(BridgeError::SinkClosed);
        }
        self.current = Some(mesh);
        self.generation += 1;
        Ok(())
    }
}
