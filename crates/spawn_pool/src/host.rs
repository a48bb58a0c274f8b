//! Host-engine collaborator trait and scene-grouping handle
//!
//! The registry is deliberately not a process-wide singleton: consumers
//! construct it explicitly and pass the host collaborator by `&mut` into
//! each operation that needs object creation or scene grouping. That keeps
//! the pool a pure directory and leaves the host free to be the same world
//! the consumer mutates between ticks.

use slotmap::new_key_type;

use crate::object::ManagedObject;

new_key_type! {
    /// Handle to a scene grouping container owned by the host.
    ///
    /// Allocated by the host's own slotmap; the pool only carries it around
    /// and stamps it onto instance placements.
    pub struct GroupId;
}

/// Collaborator interface the host engine provides to the pool registry.
///
/// Object creation is assumed infallible: a host that cannot instantiate a
/// prototype has no meaningful recovery path inside a running simulation,
/// so the failure belongs to the host, not to this seam.
pub trait PoolHost<K> {
    /// Concrete managed-object type this host produces
    type Object: ManagedObject;

    /// Create a fresh, independent instance of the given prototype
    fn instantiate(&mut self, prototype: &K) -> Self::Object;

    /// Create a named grouping container parented under `parent`
    fn create_group(&mut self, label: &str, parent: GroupId) -> GroupId;
}
