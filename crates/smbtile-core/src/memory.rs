//! Shared definitions for the Super Mario Bros. working RAM layout.
//!
//! Every address the decoder reads lives here so the rest of the crate never
//! carries magic numbers. Offsets are CPU addresses inside the 2 KiB internal
//! RAM block (`$0000-$07FF`).

use crate::ram::RamView;

/// Size of the console working RAM snapshot (2 KiB, unmirrored).
pub const RAM_SIZE: usize = 0x0800;

/// Enemy object slots.
///
/// The game keeps at most five enemies loaded at a time; every table below is
/// five consecutive bytes indexed by slot.
pub mod enemy {
    /// Number of concurrently loaded enemy slots.
    pub const SLOT_COUNT: usize = 5;

    /// Non-zero when the slot holds a live enemy (`Enemy_Flag`).
    pub const ACTIVE: u16 = 0x000F;
    /// Enemy identity byte (`Enemy_ID`).
    pub const TYPE: u16 = 0x0016;
    /// Level page the enemy is on; the high byte of its world x.
    pub const LEVEL_PAGE: u16 = 0x006E;
    /// X within the page; the low byte of its world x.
    pub const X_IN_PAGE: u16 = 0x0087;
    /// Vertical screen position.
    pub const SCREEN_Y: u16 = 0x00CF;
}

/// Player object (always slot 0 of the object tables).
pub mod player {
    /// Level page the player is on; the high byte of the world x.
    pub const LEVEL_PAGE: u16 = 0x006D;
    /// X within the page; the low byte of the world x.
    pub const X_IN_PAGE: u16 = 0x0086;
    /// Vertical viewport; below 1 once the player falls out of the screen.
    pub const Y_VIEWPORT: u16 = 0x00B5;
    /// Vertical pixel position used for the world y.
    pub const Y_PIXEL: u16 = 0x03B8;
    /// World x of the left screen edge (low byte).
    pub const SCREEN_LEFT_EDGE: u16 = 0x071C;
}

/// Metatile buffer mirrored from the background nametables.
///
/// The buffer holds two half-screen pages side by side. Each page is 13 rows
/// of 16 columns, one byte per 16x16 metatile, and the pages alternate as the
/// level scrolls right.
pub mod nametable {
    /// First byte of page 0.
    pub const BASE: u16 = 0x0500;
    /// Bytes per page (13 rows x 16 columns).
    pub const PAGE_SIZE: u16 = 0x00D0;
    /// Number of metatile columns in a page.
    pub const COLUMNS: i32 = 16;
    /// Number of metatile rows in a page; rows outside `0..ROWS` hold no tile.
    pub const ROWS: i32 = 13;
    /// Edge length of a metatile in pixels.
    pub const TILE_SIZE: i32 = 16;
    /// Width of a page in world pixels.
    pub const PAGE_WIDTH: i32 = 256;
    /// World y of row 0; the two rows above it belong to the status bar.
    pub const TOP: i32 = 32;

    /// Resolves the buffer address holding the metatile under world `(x, y)`.
    ///
    /// Returns `None` when `y` falls outside the playfield band.
    pub const fn address(x: i32, y: i32) -> Option<u16> {
        let row = (y - TOP).div_euclid(TILE_SIZE);
        if row < 0 || row >= ROWS {
            return None;
        }
        let page = x.div_euclid(PAGE_WIDTH).rem_euclid(2);
        let column = x.rem_euclid(PAGE_WIDTH) / TILE_SIZE;
        let offset = page * PAGE_SIZE as i32 + row * COLUMNS + column;
        Some(BASE + offset as u16)
    }
}

/// How [`tile_at`] reports the metatile under a world coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileQuery {
    /// The raw metatile byte.
    #[default]
    Raw,
    /// `1` for any non-empty metatile, `0` otherwise.
    Occupancy,
}

/// Reads the metatile under world `(x, y)`.
///
/// Coordinates outside the playfield band read as `0` (empty).
pub fn tile_at(ram: &RamView<'_>, x: i32, y: i32, query: TileQuery) -> u8 {
    let Some(addr) = nametable::address(x, y) else {
        return 0;
    };
    let raw = ram.read(addr);
    match query {
        TileQuery::Raw => raw,
        TileQuery::Occupancy => u8::from(raw != 0),
    }
}
