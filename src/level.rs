//! Level layouts
//!
//! A level is an ordered list of block constructor arguments. It is either
//! written out explicitly or generated as a grid whose hit-points come from a
//! seeded RNG, so the same seed always builds the same level.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_BLOCK_HIT_POINTS;
use crate::sim::{Arena, Block};

/// Constructor arguments for one block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockSpec {
    pub x: f64,
    pub y: f64,
    pub width: i32,
    pub height: i32,
    pub hit_points: i32,
}

impl BlockSpec {
    pub fn build(&self) -> Block {
        Block::new(self.x, self.y, self.width, self.height, self.hit_points)
    }
}

/// How the blocks of a level are laid out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LevelLayout {
    /// Blocks exactly as listed
    Explicit { blocks: Vec<BlockSpec> },
    /// `rows` x `cols` grid starting at `origin`, hit-points drawn from `seed`
    Grid {
        rows: u32,
        cols: u32,
        origin: (f64, f64),
        block_width: i32,
        block_height: i32,
        gap: f64,
        seed: u64,
    },
}

impl LevelLayout {
    /// The single large block used when nothing else is configured
    pub fn default_for(arena: &Arena) -> Self {
        LevelLayout::Explicit {
            blocks: vec![BlockSpec {
                x: arena.width / 2.0 + 20.0,
                y: arena.height / 2.0 - 20.0,
                width: 50,
                height: 50,
                hit_points: MAX_BLOCK_HIT_POINTS,
            }],
        }
    }

    /// Expand into block constructor arguments, in level order
    pub fn specs(&self) -> Vec<BlockSpec> {
        match self {
            LevelLayout::Explicit { blocks } => blocks.clone(),
            LevelLayout::Grid {
                rows,
                cols,
                origin,
                block_width,
                block_height,
                gap,
                seed,
            } => {
                let mut rng = Pcg32::seed_from_u64(*seed);
                let step_x = *block_width as f64 + gap;
                let step_y = *block_height as f64 + gap;

                let mut specs = Vec::with_capacity((*rows as usize).saturating_mul(*cols as usize));
                for row in 0..*rows {
                    for col in 0..*cols {
                        specs.push(BlockSpec {
                            x: origin.0 + col as f64 * step_x,
                            y: origin.1 + row as f64 * step_y,
                            width: *block_width,
                            height: *block_height,
                            hit_points: rng.random_range(1..=MAX_BLOCK_HIT_POINTS),
                        });
                    }
                }
                specs
            }
        }
    }

    /// Build the level's blocks
    pub fn build(&self) -> Vec<Block> {
        let blocks: Vec<Block> = self.specs().iter().map(BlockSpec::build).collect();
        log::info!(
            "Level built: {} blocks, {} total hit-points",
            blocks.len(),
            blocks.iter().map(|b| b.hit_points()).sum::<i32>()
        );
        blocks
    }
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self::default_for(&Arena::default())
    }
}
