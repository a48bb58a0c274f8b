//! Managed object seam and the optional reuse capability
//!
//! The pool never talks to a concrete engine object. It talks to
//! [`ManagedObject`], the seam the host engine implements, and to the
//! optional [`ReuseHook`] capability an object may expose for velocity and
//! reuse callbacks. Objects without the hook are still poolable; they are
//! simply treated as permanently in use (see [`crate::PooledInstance`]).

use crate::foundation::math::{Placement, Vec2};

/// Engine-object interface the pool manages.
///
/// Implementors own the actual visual/physical object; the pool only needs
/// to activate/deactivate it, move its [`Placement`], and (optionally) reach
/// its [`ReuseHook`].
///
/// # Contract
///
/// Hook presence must be fixed for the object's lifetime: `hook()` must
/// consistently return `Some` or consistently return `None` from
/// construction onward. The pool probes it exactly once when the object is
/// wrapped and never re-probes.
pub trait ManagedObject {
    /// Current pose and scene grouping of this object
    fn placement(&self) -> &Placement;

    /// Mutable pose and scene grouping of this object
    fn placement_mut(&mut self) -> &mut Placement;

    /// Enable or disable the object in the host engine
    fn set_active(&mut self, active: bool);

    /// Whether the object is currently enabled in the host engine
    fn is_active(&self) -> bool;

    /// Optional reuse capability, probed once at pool wrap time
    fn hook(&self) -> Option<&dyn ReuseHook> {
        None
    }

    /// Mutable access to the optional reuse capability
    fn hook_mut(&mut self) -> Option<&mut dyn ReuseHook> {
        None
    }
}

/// Optional capability a managed object may declare to take part in
/// visibility-aware recycling.
///
/// Mirrors the two callbacks the pool issues on reuse plus the visibility
/// flag it reads when selecting an instance. The flag is push-based: the
/// external observer that knows whether the object is on-screen flips it
/// through the implementor (typically via an embedded [`Visibility`]); the
/// pool only ever reads it.
pub trait ReuseHook {
    /// Whether the external observer currently reports this object on-screen
    fn is_visible(&self) -> bool;

    /// Receive the velocity payload passed to the acquire call
    fn set_velocity(&mut self, velocity: Vec2);

    /// Notification that the object was just handed out again
    fn on_reuse(&mut self) {}
}

/// Push-based visibility flag for [`ReuseHook`] implementors to embed.
///
/// Starts invisible: a freshly created object has not been observed
/// on-screen yet, which is exactly what lets the pool prefer it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Visibility {
    visible: bool,
}

impl Visibility {
    /// Create a new flag in the invisible state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current observed state
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The observer reports the object entered the visible region
    pub fn became_visible(&mut self) {
        self.visible = true;
    }

    /// The observer reports the object left the visible region
    pub fn became_invisible(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_starts_invisible() {
        assert!(!Visibility::new().is_visible());
    }

    #[test]
    fn test_visibility_follows_observer_pushes() {
        let mut visibility = Visibility::new();
        visibility.became_visible();
        assert!(visibility.is_visible());
        visibility.became_invisible();
        assert!(!visibility.is_visible());
    }
}
