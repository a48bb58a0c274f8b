//! Headless 2D stage hosting the pooled obstacles
//!
//! The stage is the pool's host collaborator: it instantiates obstacles,
//! owns the scene grouping slotmap, and acts as the visibility observer by
//! pushing on/off-screen transitions onto obstacle hooks as they drift
//! through the visible region.

use slotmap::SlotMap;
use spawn_pool::prelude::*;

use crate::config::ObstacleKind;

/// Visible region the observer reports against (world units)
pub const VISIBLE_X: (f32, f32) = (-15.0, 15.0);
/// Vertical extent of the visible region
pub const VISIBLE_Y: (f32, f32) = (-7.5, 10.0);

/// One pooled obstacle with a reuse hook
#[derive(Debug)]
pub struct Obstacle {
    kind: ObstacleKind,
    placement: Placement,
    active: bool,
    visibility: Visibility,
    velocity: Vec2,
}

impl Obstacle {
    /// Which prototype this obstacle was instantiated from
    pub fn kind(&self) -> ObstacleKind {
        self.kind
    }

    /// Current drift velocity
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn in_visible_region(&self) -> bool {
        let position = &self.placement.position;
        position.x >= VISIBLE_X.0
            && position.x <= VISIBLE_X.1
            && position.y >= VISIBLE_Y.0
            && position.y <= VISIBLE_Y.1
    }

    /// Integrate drift and push the resulting visibility transition, if
    /// any, onto the hook. Inactive obstacles are left untouched.
    fn step(&mut self, dt: f32) {
        if !self.active {
            return;
        }

        self.placement.position.x += self.velocity.x * dt;
        self.placement.position.y += self.velocity.y * dt;

        let inside = self.in_visible_region();
        if inside && !self.visibility.is_visible() {
            self.visibility.became_visible();
        } else if !inside && self.visibility.is_visible() {
            self.visibility.became_invisible();
        }
    }
}

impl ReuseHook for Obstacle {
    fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }
}

impl ManagedObject for Obstacle {
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

/// A named grouping container in the stage's scene tree
#[derive(Debug)]
pub struct Group {
    /// Display label of the container
    pub label: String,
    /// Parent container, `None` only for the root
    pub parent: Option<GroupId>,
}

/// The simulation stage: scene grouping plus obstacle instantiation
#[derive(Debug)]
pub struct Stage {
    groups: SlotMap<GroupId, Group>,
    root: GroupId,
}

impl Stage {
    /// Create a stage with a single root group
    pub fn new() -> Self {
        let mut groups = SlotMap::with_key();
        let root = groups.insert(Group {
            label: "stage".to_string(),
            parent: None,
        });
        Self { groups, root }
    }

    /// Root group every pool holder is parented under
    pub fn root(&self) -> GroupId {
        self.root
    }

    /// Look up a grouping container
    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id)
    }

    /// Number of grouping containers, root included
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Advance every pooled obstacle by one tick and report visibility
    /// transitions to the hooks.
    pub fn advance(
        &mut self,
        registry: &mut PoolRegistry<ObstacleKind, Obstacle>,
        kinds: &[ObstacleKind],
        dt: f32,
    ) {
        for kind in kinds {
            if let Some(pool) = registry.pool_mut(kind) {
                for instance in pool.iter_mut() {
                    instance.object_mut().step(dt);
                }
            }
        }
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

impl PoolHost<ObstacleKind> for Stage {
    type Object = Obstacle;

    fn instantiate(&mut self, prototype: &ObstacleKind) -> Obstacle {
        Obstacle {
            kind: *prototype,
            placement: Placement::default(),
            active: true,
            visibility: Visibility::new(),
            velocity: Vec2::zeros(),
        }
    }

    fn create_group(&mut self, label: &str, parent: GroupId) -> GroupId {
        self.groups.insert(Group {
            label: label.to_string(),
            parent: Some(parent),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obstacle_crossing_bounds_flips_visibility() {
        let mut stage = Stage::new();
        let mut registry = PoolRegistry::new();
        registry.create_pool(&mut stage, ObstacleKind::Crate, 1, false);

        // Reuse at the right edge, drifting out of the region.
        registry
            .acquire(
                &mut stage,
                &ObstacleKind::Crate,
                Vec3::new(14.0, 0.0, 5.0),
                Quat::identity(),
                Vec2::new(4.0, 0.0),
            )
            .unwrap();

        let kinds = [ObstacleKind::Crate];
        stage.advance(&mut registry, &kinds, 0.1);
        let pool = registry.pool(&ObstacleKind::Crate).unwrap();
        assert!(pool.iter().next().unwrap().is_visible());

        // One long step carries it past x = 15.
        stage.advance(&mut registry, &kinds, 1.0);
        let pool = registry.pool(&ObstacleKind::Crate).unwrap();
        assert!(!pool.iter().next().unwrap().is_visible());
    }

    #[test]
    fn test_stage_starts_with_root_group() {
        let stage = Stage::new();
        assert_eq!(stage.group_count(), 1);
        assert!(stage.group(stage.root()).unwrap().parent.is_none());
    }
}
