//! Pooled instance wrapper
//!
//! Wraps one managed object for its whole pooled lifetime: deactivated on
//! construction, reactivated and repositioned on every reuse, never
//! destroyed while its pool exists.

use crate::foundation::math::{Quat, Vec2, Vec3};
use crate::object::{ManagedObject, ReuseHook};

/// One recyclable entry in a pool.
///
/// The reuse capability is probed exactly once here, at wrap time, and the
/// result cached; [`ManagedObject`] requires hook presence to be fixed for
/// the object's lifetime, so re-probing would only cost.
#[derive(Debug)]
pub struct PooledInstance<O: ManagedObject> {
    object: O,
    has_hook: bool,
}

impl<O: ManagedObject> PooledInstance<O> {
    /// Wrap a freshly instantiated object, disabling it until first reuse
    pub(crate) fn new(mut object: O) -> Self {
        object.set_active(false);
        let has_hook = object.hook().is_some();
        Self { object, has_hook }
    }

    /// Hand the object out again at the given pose.
    ///
    /// Activates the object, overwrites its placement, and, only if the
    /// reuse capability is present, forwards the velocity payload and
    /// signals the reuse event. The object is guaranteed active and
    /// positioned on return; any deferred work the hook schedules is its
    /// own business.
    pub fn reuse(&mut self, position: Vec3, rotation: Quat, velocity: Vec2) {
        self.object.set_active(true);

        let placement = self.object.placement_mut();
        placement.position = position;
        placement.rotation = rotation;

        if self.has_hook {
            if let Some(hook) = self.object.hook_mut() {
                hook.set_velocity(velocity);
                hook.on_reuse();
            }
        }
    }

    /// Whether the external observer currently reports this instance
    /// on-screen.
    ///
    /// Instances without the reuse capability cannot report idle state, so
    /// they always count as visible and are never preferred by the
    /// selection scan.
    pub fn is_visible(&self) -> bool {
        if self.has_hook {
            self.object.hook().map_or(true, ReuseHook::is_visible)
        } else {
            true
        }
    }

    /// The wrapped engine object
    pub fn object(&self) -> &O {
        &self.object
    }

    /// Mutable access to the wrapped engine object, for the visibility
    /// observer and per-tick simulation
    pub fn object_mut(&mut self) -> &mut O {
        &mut self.object
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Placement;
    use crate::object::Visibility;

    struct Hooked {
        placement: Placement,
        active: bool,
        visibility: Visibility,
        velocity: Vec2,
        reuse_events: u32,
    }

    impl Hooked {
        fn new() -> Self {
            Self {
                placement: Placement::default(),
                active: true,
                visibility: Visibility::new(),
                velocity: Vec2::zeros(),
                reuse_events: 0,
            }
        }
    }

    impl ReuseHook for Hooked {
        fn is_visible(&self) -> bool {
            self.visibility.is_visible()
        }

        fn set_velocity(&mut self, velocity: Vec2) {
            self.velocity = velocity;
        }

        fn on_reuse(&mut self) {
            self.reuse_events += 1;
        }
    }

    impl ManagedObject for Hooked {
        fn placement(&self) -> &Placement {
            &self.placement
        }

        fn placement_mut(&mut self) -> &mut Placement {
            &mut self.placement
        }

        fn set_active(&mut self, active: bool) {
            self.active = active;
        }

        fn is_active(&self) -> bool {
            self.active
        }

        fn hook(&self) -> Option<&dyn ReuseHook> {
            Some(self)
        }

        fn hook_mut(&mut self) -> Option<&mut dyn ReuseHook> {
            Some(self)
        }
    }

    struct Hookless {
        placement: Placement,
        active: bool,
    }

    impl ManagedObject for Hookless {
        fn placement(&self) -> &Placement {
            &self.placement
        }

        fn placement_mut(&mut self) -> &mut Placement {
            &mut self.placement
        }

        fn set_active(&mut self, active: bool) {
            self.active = active;
        }

        fn is_active(&self) -> bool {
            self.active
        }
    }

    #[test]
    fn test_wrapping_deactivates_object() {
        let instance = PooledInstance::new(Hooked::new());
        assert!(!instance.object().is_active());
    }

    #[test]
    fn test_reuse_activates_and_positions() {
        let mut instance = PooledInstance::new(Hooked::new());
        let position = Vec3::new(4.0, -2.0, 5.0);
        let rotation = Quat::from_euler_angles(0.0, 0.0, 1.5);
        instance.reuse(position, rotation, Vec2::new(1.0, 0.0));

        assert!(instance.object().is_active());
        assert_eq!(instance.object().placement().position, position);
        assert_eq!(instance.object().placement().rotation, rotation);
        assert_eq!(instance.object().velocity, Vec2::new(1.0, 0.0));
        assert_eq!(instance.object().reuse_events, 1);
    }

    #[test]
    fn test_visibility_tracks_hook_flag() {
        let mut instance = PooledInstance::new(Hooked::new());
        assert!(!instance.is_visible());
        instance.object_mut().visibility.became_visible();
        assert!(instance.is_visible());
    }

    #[test]
    fn test_hookless_always_visible_and_reuse_is_safe() {
        let mut instance = PooledInstance::new(Hookless {
            placement: Placement::default(),
            active: true,
        });
        assert!(instance.is_visible());

        // No hook to forward to; must still activate and position.
        instance.reuse(Vec3::new(1.0, 1.0, 1.0), Quat::identity(), Vec2::zeros());
        assert!(instance.object().is_active());
        assert_eq!(
            instance.object().placement().position,
            Vec3::new(1.0, 1.0, 1.0)
        );
    }
}
