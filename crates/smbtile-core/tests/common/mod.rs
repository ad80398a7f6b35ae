#![allow(dead_code)]

use anyhow::{Context, Result};
use smbtile_core::memory::{RAM_SIZE, enemy as enemy_mem, nametable};

/// Builds synthetic working RAM snapshots.
#[derive(Debug, Clone)]
pub struct RamBuilder {
    bytes: Vec<u8>,
}

impl RamBuilder {
    pub fn new() -> Self {
        Self {
            bytes: vec![0; RAM_SIZE],
        }
    }

    /// Places metatile `raw` under world `(x, y)`.
    pub fn tile(mut self, x: i32, y: i32, raw: u8) -> Result<Self> {
        let addr = nametable::address(x, y)
            .with_context(|| format!("({x}, {y}) is outside the playfield"))?;
        self.bytes[addr as usize] = raw;
        Ok(self)
    }

    /// Activates enemy `slot` with identity `id` at world x / screen y.
    pub fn enemy(mut self, slot: usize, id: u8, world_x: i32, screen_y: u8) -> Self {
        self.bytes[enemy_mem::ACTIVE as usize + slot] = 1;
        self.stale_enemy(slot, id, world_x, screen_y)
    }

    /// Fills enemy `slot` tables but leaves its active flag clear.
    pub fn stale_enemy(mut self, slot: usize, id: u8, world_x: i32, screen_y: u8) -> Self {
        self.bytes[enemy_mem::TYPE as usize + slot] = id;
        self.bytes[enemy_mem::LEVEL_PAGE as usize + slot] = (world_x / 256) as u8;
        self.bytes[enemy_mem::X_IN_PAGE as usize + slot] = (world_x % 256) as u8;
        self.bytes[enemy_mem::SCREEN_Y as usize + slot] = screen_y;
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

/// Top-left corner of every 16x16 block filled entirely with `code`, scanning
/// on the 1-pixel lattice.
pub fn solid_blocks(grid: &smbtile_core::TileGrid, code: u8) -> Vec<(usize, usize)> {
    let mut found = Vec::new();
    for y in 0..=(240 - 16) {
        for x in 0..=(256 - 16) {
            let full = (0..16).all(|dy| (0..16).all(|dx| grid[(x + dx, y + dy)] == code));
            if full {
                found.push((x, y));
            }
        }
    }
    found
}
