//! Per-prototype pool
//!
//! Plain data holder: the growth flag plus the FIFO instance queue. All
//! allocation logic lives in [`crate::PoolRegistry`]; keeping this type
//! separate lets per-prototype policy (growth) vary independently of the
//! shared directory structure.

use std::collections::VecDeque;

use crate::instance::PooledInstance;
use crate::object::ManagedObject;

/// Ordered collection of pooled instances for exactly one prototype.
///
/// Insertion order matters: the forced-reuse fallback dequeues the oldest
/// entry, so the queue is strictly FIFO. Instances are never removed once
/// added; the count only ever grows.
#[derive(Debug)]
pub struct Pool<O: ManagedObject> {
    pub(crate) dynamic_growth: bool,
    pub(crate) instances: VecDeque<PooledInstance<O>>,
}

impl<O: ManagedObject> Pool<O> {
    pub(crate) fn new(dynamic_growth: bool, instances: VecDeque<PooledInstance<O>>) -> Self {
        Self {
            dynamic_growth,
            instances,
        }
    }

    /// Whether this pool may grow instead of force-reusing a visible
    /// instance when saturated
    pub fn dynamic_growth(&self) -> bool {
        self.dynamic_growth
    }

    /// Number of instances currently owned by this pool
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether this pool owns no instances
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Iterate over the instances in queue order
    pub fn iter(&self) -> impl Iterator<Item = &PooledInstance<O>> {
        self.instances.iter()
    }

    /// Iterate mutably over the instances in queue order.
    ///
    /// For the visibility observer and per-tick simulation; iteration never
    /// reorders or removes entries, which stay the registry's business.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PooledInstance<O>> {
        self.instances.iter_mut()
    }
}
