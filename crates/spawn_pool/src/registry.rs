//! Pool registry and allocation algorithm
//!
//! The registry is the sole consumer-facing entry point: a directory from
//! prototype key to [`Pool`], plus the scan-select-requeue algorithm that
//! hands out instances. It is explicitly constructed and passed around by
//! the consumer; there is no process-wide singleton and no internal
//! locking. A single logical actor (one simulation tick) is assumed to
//! drive all operations.
//!
//! Unknown prototypes are silent no-ops on every operation: the registry
//! favors defensive silence over crashing a running simulation loop.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;

use crate::foundation::math::{Quat, Vec2, Vec3};
use crate::host::{GroupId, PoolHost};
use crate::instance::PooledInstance;
use crate::object::ManagedObject;
use crate::pool::Pool;

/// Running counters for monitoring pool behavior
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryStats {
    /// Instances handed out since creation
    pub acquired: u64,
    /// Times a saturated pool grew by one instead of force-reusing
    pub dynamic_growths: u64,
    /// Times the FIFO head was reclaimed while still reported visible
    pub forced_reuses: u64,
}

/// Directory of pools keyed by caller-supplied prototype identity.
///
/// Two instances share a pool iff they were instantiated from the same
/// prototype key. The key is decided by the caller at pool-creation time;
/// nothing here relies on a runtime-assigned identity.
///
/// # Allocation policy
///
/// `acquire` prefers the first instance in queue order whose observer
/// reports it invisible (first-fit, a deliberate simplicity/cost tradeoff
/// over least-recently-used). When every instance is in use, a pool with
/// dynamic growth enabled permanently adds one instance; a pool without it
/// reclaims the oldest-enqueued instance regardless of visibility. The
/// registry therefore always returns an instance for a known prototype
/// with a non-empty pool — saturation is resolved by growth or forced
/// reuse, never reported as an error.
#[derive(Debug)]
pub struct PoolRegistry<K, O: ManagedObject> {
    pools: HashMap<K, Pool<O>>,
    stats: RegistryStats,
}

impl<K, O> Default for PoolRegistry<K, O>
where
    K: Eq + Hash + fmt::Debug,
    O: ManagedObject,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, O> PoolRegistry<K, O>
where
    K: Eq + Hash + fmt::Debug,
    O: ManagedObject,
{
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            pools: HashMap::new(),
            stats: RegistryStats::default(),
        }
    }

    /// Build a pool of `size` deactivated instances for `prototype`.
    ///
    /// Idempotent: if a pool already exists for this key the call is a
    /// no-op and the new `size` and `dynamic_growth` arguments are
    /// silently discarded.
    pub fn create_pool<H>(&mut self, host: &mut H, prototype: K, size: usize, dynamic_growth: bool)
    where
        H: PoolHost<K, Object = O>,
    {
        if self.pools.contains_key(&prototype) {
            return;
        }

        let mut instances = VecDeque::with_capacity(size);
        for _ in 0..size {
            instances.push_back(PooledInstance::new(host.instantiate(&prototype)));
        }

        log::info!(
            "Created pool for {:?} with {} instances (dynamic growth: {})",
            prototype,
            size,
            dynamic_growth
        );
        self.pools.insert(prototype, Pool::new(dynamic_growth, instances));
    }

    /// Create a grouping container under `parent` and reparent every
    /// existing instance of `prototype` into it.
    ///
    /// Pure organizational side effect with no bearing on allocation.
    /// The container is created even when no pool is registered for the
    /// key — a group always gets its holder — and each call creates a
    /// fresh one.
    pub fn parent_pool<H>(&mut self, host: &mut H, prototype: &K, parent: GroupId)
    where
        H: PoolHost<K, Object = O>,
    {
        let group = host.create_group(&format!("{prototype:?} pool"), parent);

        if let Some(pool) = self.pools.get_mut(prototype) {
            for instance in &mut pool.instances {
                instance.object_mut().placement_mut().parent = Some(group);
            }
            log::info!(
                "Parented {} pooled instances of {:?} under {:?}",
                pool.instances.len(),
                prototype,
                group
            );
        }
    }

    /// Append `delta` fresh instances to an existing pool.
    ///
    /// New instances inherit the scene parent of the first existing entry,
    /// so a pool stays under one holder once `parent_pool` has run. No-op
    /// if the pool does not exist.
    pub fn increase_pool_size<H>(&mut self, host: &mut H, prototype: &K, delta: usize)
    where
        H: PoolHost<K, Object = O>,
    {
        let Some(pool) = self.pools.get_mut(prototype) else {
            return;
        };

        let parent = pool
            .instances
            .front()
            .and_then(|instance| instance.object().placement().parent);

        for _ in 0..delta {
            let mut instance = PooledInstance::new(host.instantiate(prototype));
            instance.object_mut().placement_mut().parent = parent;
            pool.instances.push_back(instance);
        }

        log::debug!(
            "Grew pool for {:?} by {} to {} instances",
            prototype,
            delta,
            pool.instances.len()
        );
    }

    /// Flip the per-pool dynamic-growth flag; no-op if the pool does not
    /// exist
    pub fn enable_dynamic_pooling(&mut self, prototype: &K, enabled: bool) {
        if let Some(pool) = self.pools.get_mut(prototype) {
            pool.dynamic_growth = enabled;
            log::debug!("Dynamic growth for {:?} set to {}", prototype, enabled);
        }
    }

    /// Select an instance of `prototype`, reactivate it at the given pose,
    /// and hand it out.
    ///
    /// First-fit scan in queue order for an instance reported invisible;
    /// on saturation, either grows the pool by one (dynamic growth) or
    /// reclaims the FIFO head regardless of visibility. The selected
    /// instance is re-enqueued at the tail before `reuse` runs, preserving
    /// FIFO order for future forced dequeues.
    ///
    /// Returns `None` only for an unregistered prototype (a silent miss)
    /// or an empty, non-growing pool.
    pub fn acquire<H>(
        &mut self,
        host: &mut H,
        prototype: &K,
        position: Vec3,
        rotation: Quat,
        velocity: Vec2,
    ) -> Option<&mut PooledInstance<O>>
    where
        H: PoolHost<K, Object = O>,
    {
        if !self.pools.contains_key(prototype) {
            log::trace!("Acquire miss: no pool registered for {:?}", prototype);
            return None;
        }

        let pool = self.pools.get_mut(prototype)?;
        let selected = match Self::take_first_idle(&mut pool.instances) {
            Some(instance) => instance,
            None => self.select_fallback(host, prototype)?,
        };

        self.stats.acquired += 1;

        let pool = self.pools.get_mut(prototype)?;
        pool.instances.push_back(selected);
        let instance = pool.instances.back_mut()?;
        instance.reuse(position, rotation, velocity);
        Some(instance)
    }

    /// Resolve a saturated pool: grow by one, or reclaim the FIFO head.
    fn select_fallback<H>(&mut self, host: &mut H, prototype: &K) -> Option<PooledInstance<O>>
    where
        H: PoolHost<K, Object = O>,
    {
        if self.pools.get(prototype)?.dynamic_growth {
            self.increase_pool_size(host, prototype, 1);
            self.stats.dynamic_growths += 1;

            // Re-scan instead of taking the new entry directly: an
            // instance freed since the first scan may satisfy the request
            // first. The freshly created entry qualifies whenever its
            // object carries the reuse capability.
            let pool = self.pools.get_mut(prototype)?;
            if let Some(instance) = Self::take_first_idle(&mut pool.instances) {
                return Some(instance);
            }
        }

        let forced = self.pools.get_mut(prototype)?.instances.pop_front();
        if forced.is_some() {
            self.stats.forced_reuses += 1;
            log::trace!("Pool for {:?} saturated; reclaiming FIFO head", prototype);
        }
        forced
    }

    /// Remove and return the first instance in queue order that is not
    /// currently reported visible.
    fn take_first_idle(instances: &mut VecDeque<PooledInstance<O>>) -> Option<PooledInstance<O>> {
        let index = instances
            .iter()
            .position(|instance| !instance.is_visible())?;
        instances.remove(index)
    }

    /// Whether a pool exists for the given prototype
    pub fn has_pool(&self, prototype: &K) -> bool {
        self.pools.contains_key(prototype)
    }

    /// The pool for the given prototype, if registered
    pub fn pool(&self, prototype: &K) -> Option<&Pool<O>> {
        self.pools.get(prototype)
    }

    /// Mutable access to the pool for the given prototype.
    ///
    /// Exposes instance iteration for the visibility observer; queue order
    /// and membership remain the registry's business.
    pub fn pool_mut(&mut self, prototype: &K) -> Option<&mut Pool<O>> {
        self.pools.get_mut(prototype)
    }

    /// Instance count of the given prototype's pool, if registered
    pub fn pool_size(&self, prototype: &K) -> Option<usize> {
        self.pools.get(prototype).map(Pool::len)
    }

    /// Number of registered pools
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    /// Instance count across all pools
    pub fn total_instances(&self) -> usize {
        self.pools.values().map(Pool::len).sum()
    }

    /// Running allocation counters
    pub fn stats(&self) -> RegistryStats {
        self.stats
    }
}
