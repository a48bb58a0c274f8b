//! Obstacle field demo
//!
//! Headless simulation exercising the pooling engine the way a game loop
//! would: pre-allocate a pool per obstacle prototype from a weighted RON
//! table, then spawn through the registry every tick while the stage
//! drifts obstacles through (and out of) the visible region.

mod config;
mod stage;

use rand::Rng;

use config::{ObstacleKind, SpawnTable};
use spawn_pool::prelude::*;
use stage::Stage;

const TICKS: u32 = 600;
const TICK_SECONDS: f32 = 1.0 / 60.0;
const SPAWN_DEPTH: f32 = 5.0;

fn main() {
    spawn_pool::foundation::logging::init();

    let table_path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/spawn_table.ron");
    let mut table = match SpawnTable::load(table_path) {
        Ok(table) => table,
        Err(err) => {
            log::warn!("Falling back to built-in spawn table: {err}");
            SpawnTable::default()
        }
    };
    table.sort_by_weight();

    let mut stage = Stage::new();
    let mut registry = PoolRegistry::new();
    let root = stage.root();

    for entry in &table.entries {
        registry.create_pool(&mut stage, entry.kind, entry.spawn_amount, false);
        registry.parent_pool(&mut stage, &entry.kind, root);
    }
    // Mines are rare but bursty; let that pool grow rather than steal
    // on-screen instances.
    registry.enable_dynamic_pooling(&ObstacleKind::Mine, true);

    log::info!(
        "Stage ready: {} pools, {} instances, {} scene groups",
        registry.pool_count(),
        registry.total_instances(),
        stage.group_count()
    );

    let kinds: Vec<ObstacleKind> = table.entries.iter().map(|entry| entry.kind).collect();
    let weight_total = table.weight_total();
    let mut rng = rand::thread_rng();

    for tick in 0..TICKS {
        if let Some(kind) = pick_prototype(&table, weight_total, &mut rng) {
            let position = Vec3::new(
                rng.gen_range(stage::VISIBLE_X.0..stage::VISIBLE_X.1),
                rng.gen_range(stage::VISIBLE_Y.0..stage::VISIBLE_Y.1),
                SPAWN_DEPTH,
            );
            let velocity = Vec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-6.0..-2.0));

            if let Some(instance) = registry.acquire(
                &mut stage,
                &kind,
                position,
                Quat::identity(),
                velocity,
            ) {
                log::debug!(
                    "tick {tick}: spawned {:?} at ({:.1}, {:.1}) drifting {:?}",
                    instance.object().kind(),
                    position.x,
                    position.y,
                    instance.object().velocity()
                );
            }
        }

        stage.advance(&mut registry, &kinds, TICK_SECONDS);
    }

    let stats = registry.stats();
    log::info!(
        "Simulation done: {} acquires, {} dynamic growths, {} forced reuses, {} instances resident",
        stats.acquired,
        stats.dynamic_growths,
        stats.forced_reuses,
        registry.total_instances()
    );
}

/// Weighted prototype selection: a uniform roll walked against the sorted
/// weights. Rolls beyond the summed weights select nothing, so a tick can
/// stay quiet.
fn pick_prototype(
    table: &SpawnTable,
    weight_total: u32,
    rng: &mut impl Rng,
) -> Option<ObstacleKind> {
    let roll = rng.gen_range(0..weight_total);
    let mut weight_sum = 0;

    for entry in &table.entries {
        weight_sum += entry.weight;
        if roll < weight_sum {
            return Some(entry.kind);
        }
    }

    None
}
