//! Weighted spawn table configuration
//!
//! The obstacle field is driven by a RON table of prototypes, each with a
//! selection weight and the number of instances to pre-allocate.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Obstacle prototypes available to the spawner.
///
/// Doubles as the pool registry key: one pool per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Large slow rock
    Boulder,
    /// Light tumbling box
    Crate,
    /// Small fast hazard
    Mine,
}

/// One spawnable prototype with its selection weight and pool size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedPrototype {
    /// Which obstacle this entry spawns
    pub kind: ObstacleKind,

    /// Relative selection weight (0-100)
    pub weight: u32,

    /// Instances to pre-allocate in this prototype's pool
    pub spawn_amount: usize,
}

/// The full weighted spawn table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnTable {
    /// Spawnable prototypes in selection order
    pub entries: Vec<WeightedPrototype>,
}

impl Default for SpawnTable {
    fn default() -> Self {
        Self {
            entries: vec![
                WeightedPrototype {
                    kind: ObstacleKind::Boulder,
                    weight: 50,
                    spawn_amount: 8,
                },
                WeightedPrototype {
                    kind: ObstacleKind::Crate,
                    weight: 30,
                    spawn_amount: 12,
                },
                WeightedPrototype {
                    kind: ObstacleKind::Mine,
                    weight: 10,
                    spawn_amount: 4,
                },
            ],
        }
    }
}

impl SpawnTable {
    /// Load a spawn table from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Order entries by descending weight so the selection walk tries the
    /// likeliest prototypes first
    pub fn sort_by_weight(&mut self) {
        self.entries.sort_by(|a, b| b.weight.cmp(&a.weight));
    }

    /// Total weight the selection roll draws from.
    ///
    /// Starts at 1, not 0, leaving one sliver of the roll range that maps
    /// to "spawn nothing this tick".
    pub fn weight_total(&self) -> u32 {
        1 + self.entries.iter().map(|entry| entry.weight).sum::<u32>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ron_table() {
        let table: SpawnTable = ron::from_str(
            r#"(
                entries: [
                    (kind: Boulder, weight: 60, spawn_amount: 5),
                    (kind: Mine, weight: 15, spawn_amount: 2),
                ],
            )"#,
        )
        .unwrap();
        assert_eq!(table.entries.len(), 2);
        assert_eq!(table.entries[0].kind, ObstacleKind::Boulder);
        assert_eq!(table.entries[1].spawn_amount, 2);
    }

    #[test]
    fn test_sort_by_weight_is_descending() {
        let mut table = SpawnTable {
            entries: vec![
                WeightedPrototype {
                    kind: ObstacleKind::Mine,
                    weight: 10,
                    spawn_amount: 1,
                },
                WeightedPrototype {
                    kind: ObstacleKind::Boulder,
                    weight: 90,
                    spawn_amount: 1,
                },
            ],
        };
        table.sort_by_weight();
        assert_eq!(table.entries[0].kind, ObstacleKind::Boulder);
    }

    #[test]
    fn test_weight_total_reserves_empty_roll() {
        let table = SpawnTable::default();
        assert_eq!(table.weight_total(), 91);
    }
}
