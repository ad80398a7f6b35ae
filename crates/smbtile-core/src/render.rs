//! Frame decoder that turns a working RAM snapshot into a [`TileGrid`].
//!
//! Each frame is drawn in three layers, later layers winning:
//!
//! 1. scenery, sampled from the metatile buffer every 8 pixels across the
//!    viewport (one extra sample past each edge so sub-tile scroll offsets
//!    leave no gaps);
//! 2. enemies from the five object slots;
//! 3. the player marker.
//!
//! Metatiles whose state is not recoverable from RAM (see
//! [`StaticKind::Persisted`](crate::tile::StaticKind::Persisted)) are copied
//! from the grid the renderer produced for the previous frame, which is why a
//! renderer instance must live for exactly one episode and be [`reset`]
//! between episodes.
//!
//! [`reset`]: TileRenderer::reset

use tracing::{debug, debug_span, trace, warn};

use crate::{
    config::RendererConfig,
    enemy::{EnemyRecord, locate_enemies},
    error::DecodeError,
    grid::{BLOCK_SIZE, GRID_HEIGHT, GRID_WIDTH, TileGrid},
    memory::{self, TileQuery},
    player::PlayerPosition,
    ram::RamView,
    tile::{Category, EnemyKind, TileClass, classify_enemy, classify_static},
};

/// Distance between scenery samples in both axes.
const SAMPLE_STEP: i32 = 8;
/// Top block rows covered by the status bar.
const STATUS_ROWS: i32 = 2;
/// Enemy screen y points at the top half of the sprite; shift to center it.
const ENEMY_Y_OFFSET: i32 = BLOCK_SIZE / 2;
/// The player's world y is measured from this line, one block below the screen.
const PLAYER_Y_BASE: i32 = 256 + BLOCK_SIZE;

#[derive(Debug, Clone)]
pub struct TileRenderer {
    config: RendererConfig,
    position: PlayerPosition,
    last_grid: TileGrid,
}

impl TileRenderer {
    pub fn new(config: RendererConfig) -> Self {
        Self {
            config,
            position: PlayerPosition::UNINITIALIZED,
            last_grid: TileGrid::new(),
        }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RendererConfig) {
        debug!(
            unknown_enemy = %config.unknown_enemy,
            hide_concealed_plants = config.hide_concealed_plants,
            "renderer config updated"
        );
        self.config = config;
    }

    /// Position used by the next [`render`](Self::render).
    pub fn position(&self) -> PlayerPosition {
        self.position
    }

    pub fn set_position(&mut self, position: PlayerPosition) {
        self.position = position;
    }

    /// The grid returned by the most recent successful decode.
    pub fn last_grid(&self) -> &TileGrid {
        &self.last_grid
    }

    /// Starts a new episode: forgets the carried-over grid and the position.
    pub fn reset(&mut self) {
        debug!("renderer reset");
        self.last_grid.clear();
        self.position = PlayerPosition::UNINITIALIZED;
    }

    /// Starts a new episode carrying `grid` as the previous frame.
    pub fn reset_to(&mut self, grid: TileGrid) {
        debug!("renderer reset to a seeded grid");
        self.last_grid = grid;
        self.position = PlayerPosition::UNINITIALIZED;
    }

    /// Updates the player position and decodes one frame.
    pub fn decode(
        &mut self,
        ram: &[u8],
        position: PlayerPosition,
    ) -> Result<TileGrid, DecodeError> {
        self.set_position(position);
        self.render(ram)
    }

    /// Decodes one frame using the position from the last
    /// [`set_position`](Self::set_position).
    ///
    /// On error nothing is drawn and the carried-over grid is left untouched.
    pub fn render(&mut self, ram: &[u8]) -> Result<TileGrid, DecodeError> {
        let position = self.position;
        if let Err(err) = position.validate() {
            warn!(%err, "refusing to decode frame");
            return Err(err);
        }
        let ram = RamView::new(ram)
            .inspect_err(|err| warn!(%err, "refusing to decode frame"))?;

        let start_x = position.viewport_origin();
        let _span = debug_span!("render", start_x, relative_x = position.relative_x).entered();

        let mut grid = TileGrid::new();
        self.draw_scenery(&mut grid, &ram, start_x);
        self.draw_enemies(&mut grid, &ram, position);
        grid.fill_block(
            position.relative_x,
            PLAYER_Y_BASE - position.absolute_y,
            Category::Player.code(),
        );

        self.last_grid.clone_from(&grid);
        Ok(grid)
    }

    fn draw_scenery(&self, grid: &mut TileGrid, ram: &RamView<'_>, start_x: i32) {
        // Samples sit on the world's 8-pixel lattice so each one lands on a
        // single metatile; the first may start left of the screen.
        let first_x = start_x - start_x.rem_euclid(SAMPLE_STEP);
        let last_x = start_x.saturating_add(GRID_WIDTH as i32);

        for world_y in (0..=GRID_HEIGHT as i32).step_by(SAMPLE_STEP as usize) {
            for world_x in (first_x..=last_x).step_by(SAMPLE_STEP as usize) {
                let screen_x = world_x - start_x;
                if world_y / BLOCK_SIZE < STATUS_ROWS {
                    grid.fill_block(screen_x, world_y, Category::Empty.code());
                    continue;
                }

                let raw = memory::tile_at(ram, world_x, world_y, TileQuery::Raw);
                match classify_static(raw) {
                    TileClass::Fixed(category) => {
                        grid.fill_block(screen_x, world_y, category.code());
                    }
                    TileClass::Dynamic(raw) => grid.fill_block(screen_x, world_y, raw),
                    TileClass::Persisted => {
                        trace!(world_x, world_y, "carrying persisted tile");
                        grid.copy_block(&self.last_grid, screen_x, world_y);
                    }
                }
            }
        }
    }

    fn draw_enemies(&self, grid: &mut TileGrid, ram: &RamView<'_>, position: PlayerPosition) {
        // Concealment is judged against scenery only, so collect every
        // visible enemy before the first one is drawn.
        let visible: Vec<(i32, i32)> = locate_enemies(*ram)
            .filter_map(|enemy| self.place_enemy(grid, &enemy, position))
            .collect();

        for (x, y) in visible {
            grid.fill_block(x, y, Category::Enemy.code());
        }
    }

    fn place_enemy(
        &self,
        scenery: &TileGrid,
        enemy: &EnemyRecord,
        position: PlayerPosition,
    ) -> Option<(i32, i32)> {
        let x = enemy
            .world_x
            .saturating_sub(position.absolute_x)
            .saturating_add(position.relative_x);
        let y = enemy.screen_y + ENEMY_Y_OFFSET;
        if x < 0 || y < 0 {
            return None;
        }

        match classify_enemy(enemy.id) {
            EnemyKind::Hazard => {}
            EnemyKind::Unknown if self.config.unknown_enemy.draws() => {}
            EnemyKind::Unknown => {
                trace!(slot = enemy.slot, id = enemy.id, "suppressing unknown enemy");
                return None;
            }
            EnemyKind::PipePlant if self.config.hide_concealed_plants => {
                let center = scenery.get(
                    x.saturating_add(BLOCK_SIZE / 2) as usize,
                    (y + BLOCK_SIZE / 2) as usize,
                );
                if center.is_some_and(|code| code != Category::Empty.code()) {
                    trace!(slot = enemy.slot, x, y, "plant concealed in pipe");
                    return None;
                }
            }
            EnemyKind::PipePlant => {}
        }
        Some((x, y))
    }
}

impl Default for TileRenderer {
    fn default() -> Self {
        Self::new(RendererConfig::default())
    }
}
