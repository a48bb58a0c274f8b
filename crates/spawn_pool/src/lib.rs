//! # Spawn Pool
//!
//! A prototype-keyed object pooling engine for high-frequency
//! spawn/despawn workloads (projectiles, particles, enemies) where paying
//! allocation and destruction cost per spawn would dominate.
//!
//! ## Features
//!
//! - **Prototype-Keyed Pools**: one FIFO pool per caller-supplied key
//! - **Visibility-Aware Recycling**: prefers instances reported off-screen
//! - **Dynamic Growth**: per-pool opt-in to grow instead of force-reuse
//! - **Bounded Saturation**: fixed pools reclaim the oldest instance, never fail
//! - **Engine-Agnostic**: the host engine plugs in behind two small traits
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use slotmap::SlotMap;
//! use spawn_pool::prelude::*;
//!
//! struct Bullet {
//!     placement: Placement,
//!     active: bool,
//!     visibility: Visibility,
//!     velocity: Vec2,
//! }
//!
//! impl ReuseHook for Bullet {
//!     fn is_visible(&self) -> bool {
//!         self.visibility.is_visible()
//!     }
//!     fn set_velocity(&mut self, velocity: Vec2) {
//!         self.velocity = velocity;
//!     }
//! }
//!
//! impl ManagedObject for Bullet {
//!     fn placement(&self) -> &Placement {
//!         &self.placement
//!     }
//!     fn placement_mut(&mut self) -> &mut Placement {
//!         &mut self.placement
//!     }
//!     fn set_active(&mut self, active: bool) {
//!         self.active = active;
//!     }
//!     fn is_active(&self) -> bool {
//!         self.active
//!     }
//!     fn hook(&self) -> Option<&dyn ReuseHook> {
//!         Some(self)
//!     }
//!     fn hook_mut(&mut self) -> Option<&mut dyn ReuseHook> {
//!         Some(self)
//!     }
//! }
//!
//! struct World {
//!     groups: SlotMap<GroupId, String>,
//! }
//!
//! impl PoolHost<&'static str> for World {
//!     type Object = Bullet;
//!
//!     fn instantiate(&mut self, _prototype: &&'static str) -> Bullet {
//!         Bullet {
//!             placement: Placement::default(),
//!             active: true,
//!             visibility: Visibility::new(),
//!             velocity: Vec2::zeros(),
//!         }
//!     }
//!
//!     fn create_group(&mut self, label: &str, _parent: GroupId) -> GroupId {
//!         self.groups.insert(label.to_string())
//!     }
//! }
//!
//! let mut world = World { groups: SlotMap::with_key() };
//! let mut registry = PoolRegistry::new();
//! registry.create_pool(&mut world, "bullet", 32, false);
//!
//! let bullet = registry.acquire(
//!     &mut world,
//!     &"bullet",
//!     Vec3::zeros(),
//!     Quat::identity(),
//!     Vec2::new(0.0, 12.0),
//! );
//! assert!(bullet.is_some());
//! ```
//!
//! The registry is a single-actor, synchronous structure: one simulation
//! tick drives all operations, and multi-actor access must be serialized
//! by the caller.

pub mod foundation;

mod host;
mod instance;
mod object;
mod pool;
mod registry;

pub use host::{GroupId, PoolHost};
pub use instance::PooledInstance;
pub use object::{ManagedObject, ReuseHook, Visibility};
pub use pool::Pool;
pub use registry::{PoolRegistry, RegistryStats};

/// Common imports for pooling consumers
pub mod prelude {
    pub use crate::{
        foundation::math::{Placement, Quat, Vec2, Vec3},
        GroupId, ManagedObject, Pool, PoolHost, PoolRegistry, PooledInstance, RegistryStats,
        ReuseHook, Visibility,
    };
}
