//! Decodes Super Mario Bros. working RAM into a semantic tile grid.
//!
//! ```no_run
//! use smbtile_core::{PlayerPosition, TileRenderer};
//!
//! # fn frame_ram() -> Vec<u8> { vec![0; smbtile_core::memory::RAM_SIZE] }
//! let mut renderer = TileRenderer::default();
//! let ram = frame_ram();
//! let grid = renderer.decode(&ram, PlayerPosition::new(40, 79, 40))?;
//! assert_eq!(grid.rows().len(), 240);
//! # Ok::<(), smbtile_core::Error>(())
//! ```

pub mod config;
pub mod enemy;
pub mod error;
pub mod grid;
pub mod memory;
pub mod player;
pub mod ram;
pub mod render;
pub mod tile;

pub use config::{RendererConfig, UnknownEnemyPolicy};
pub use enemy::{EnemyRecord, locate_enemies};
pub use error::DecodeError as Error;
pub use grid::TileGrid;
pub use player::PlayerPosition;
pub use ram::RamView;
pub use render::TileRenderer;
pub use tile::{Category, TileClass, classify_enemy, classify_static};

#[cfg(test)]
mod tests {
    use ctor::ctor;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    #[ctor]
    fn init_tracing() {
        let subscriber = FmtSubscriber::builder()
            .with_file(true)
            .with_line_number(true)
            .with_max_level(Level::DEBUG)
            .pretty()
            .finish();
        tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
    }
}
