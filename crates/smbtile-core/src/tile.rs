//! Metatile and enemy classification tables.
//!
//! Both tables are declaration-ordered lists of `(name, raw byte, kind)`
//! entries. A 256-slot reverse index is built from each list at compile time,
//! so a lookup is a single array read while still honouring "first
//! declaration wins" for any byte that appears twice.

use core::fmt;

/// Semantic class written into the output grid.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    #[default]
    Empty = 0,
    /// Ground, stairs and any other solid scenery.
    Solid = 1,
    Pipe = 2,
    Flagpole = 3,
    QuestionBlock = 4,
    Coin = 5,
    BreakableBlock = 6,
    Enemy = 7,
    Player = 8,
    /// A question block that has already been hit.
    UsedBlock = 9,
    /// The bridge axe at the end of a castle.
    Axe = 10,
}

impl Category {
    /// Code stored in the grid for this category.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Maps a grid code back to a category, if it is a curated one.
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => Self::Empty,
            1 => Self::Solid,
            2 => Self::Pipe,
            3 => Self::Flagpole,
            4 => Self::QuestionBlock,
            5 => Self::Coin,
            6 => Self::BreakableBlock,
            7 => Self::Enemy,
            8 => Self::Player,
            9 => Self::UsedBlock,
            10 => Self::Axe,
            _ => return None,
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Empty => "empty",
            Category::Solid => "solid",
            Category::Pipe => "pipe",
            Category::Flagpole => "flagpole",
            Category::QuestionBlock => "question-block",
            Category::Coin => "coin",
            Category::BreakableBlock => "breakable-block",
            Category::Enemy => "enemy",
            Category::Player => "player",
            Category::UsedBlock => "used-block",
            Category::Axe => "axe",
        };
        f.write_str(s)
    }
}

/// Kind attached to a curated metatile entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaticKind {
    Fixed(Category),
    /// The metatile byte does not change when the block is hit, so its
    /// current state is carried over from the previous frame's grid.
    Persisted,
}

/// Kind attached to an enemy table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Hazard,
    /// Lives inside pipes; hidden while its center overlaps scenery.
    PipePlant,
    /// Sentinel for slots whose identity byte is not a real enemy.
    Unknown,
}

/// Outcome of classifying a raw metatile byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileClass {
    Fixed(Category),
    Persisted,
    /// No curated entry; the raw byte is passed through as its own code.
    Dynamic(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileEntry<K> {
    pub name: &'static str,
    pub raw: u8,
    pub kind: K,
}

const fn entry<K>(name: &'static str, raw: u8, kind: K) -> TileEntry<K> {
    TileEntry { name, raw, kind }
}

/// Declaration-ordered table with a compile-time reverse index.
#[derive(Debug)]
pub struct TileTable<K: 'static> {
    entries: &'static [TileEntry<K>],
    /// `index[raw]` is the 1-based position of the first entry for `raw`, or 0.
    index: [u8; 256],
}

impl<K: 'static> TileTable<K> {
    pub const fn new(entries: &'static [TileEntry<K>]) -> Self {
        assert!(entries.len() < 256, "tile table too large for a u8 index");
        let mut index = [0u8; 256];
        // Walk backwards so earlier declarations overwrite later duplicates.
        let mut i = entries.len();
        while i > 0 {
            i -= 1;
            index[entries[i].raw as usize] = (i + 1) as u8;
        }
        Self { entries, index }
    }

    pub fn lookup(&self, raw: u8) -> Option<&'static TileEntry<K>> {
        match self.index[raw as usize] {
            0 => None,
            slot => self.entries.get(slot as usize - 1),
        }
    }

    pub fn entries(&self) -> &'static [TileEntry<K>] {
        self.entries
    }
}

use Category as C;
use StaticKind::{Fixed, Persisted};

#[rustfmt::skip]
const STATIC_ENTRIES: &[TileEntry<StaticKind>] = &[
    entry("Empty",               0x00, Fixed(C::Empty)),
    entry("Fake",                0x01, Fixed(C::Solid)),
    entry("Ground",              0x54, Fixed(C::Solid)),
    entry("Stair_Block",         0x61, Fixed(C::Solid)),
    entry("Top_Pipe1",           0x12, Fixed(C::Pipe)),
    entry("Top_Pipe2",           0x13, Fixed(C::Pipe)),
    entry("Bottom_Pipe1",        0x14, Fixed(C::Pipe)),
    entry("Bottom_Pipe2",        0x15, Fixed(C::Pipe)),
    entry("Flagpole_Top",        0x24, Fixed(C::Flagpole)),
    entry("Flagpole",            0x25, Fixed(C::Flagpole)),
    entry("Coin_Block1",         0xC0, Fixed(C::QuestionBlock)),
    entry("Coin_Block2",         0xC1, Fixed(C::QuestionBlock)),
    entry("Coin",                0xC2, Fixed(C::Coin)),
    entry("Underwater_Coin",     0xC3, Fixed(C::Coin)),
    entry("Used_Block",          0xC4, Fixed(C::UsedBlock)),
    entry("Axe",                 0xC5, Fixed(C::Axe)),
    entry("Breakable_Block",     0x51, Fixed(C::BreakableBlock)),
    entry("Hidden_Block",        0x60, Persisted),
    entry("Generic_Static_Tile", 0xFF, Fixed(C::Solid)),
];

#[rustfmt::skip]
const ENEMY_ENTRIES: &[TileEntry<EnemyKind>] = &[
    entry("Green_Koopa1",           0x00, EnemyKind::Hazard),
    entry("Red_Koopa1",             0x01, EnemyKind::Hazard),
    entry("Buzzy_Beetle",           0x02, EnemyKind::Hazard),
    entry("Red_Koopa2",             0x03, EnemyKind::Hazard),
    entry("Green_Koopa2",           0x04, EnemyKind::Hazard),
    entry("Hammer_Brother",         0x05, EnemyKind::Hazard),
    entry("Goomba",                 0x06, EnemyKind::Hazard),
    entry("Blooper",                0x07, EnemyKind::Hazard),
    entry("Bullet_Bill",            0x08, EnemyKind::Hazard),
    entry("Green_Koopa_Paratroopa", 0x09, EnemyKind::Hazard),
    entry("Grey_Cheep_Cheep",       0x0A, EnemyKind::Hazard),
    entry("Red_Cheep_Cheep",        0x0B, EnemyKind::Hazard),
    entry("Podoboo",                0x0C, EnemyKind::Hazard),
    entry("Piranha_Plant",          0x0D, EnemyKind::PipePlant),
    entry("Green_Paratroopa_Jump",  0x0E, EnemyKind::Hazard),
    entry("Bowser_Flame1",          0x10, EnemyKind::Hazard),
    entry("Lakitu",                 0x11, EnemyKind::Hazard),
    entry("Spiny_Egg",              0x12, EnemyKind::Hazard),
    entry("Fly_Cheep_Cheep",        0x14, EnemyKind::Hazard),
    entry("Bowser_Flame2",          0x15, EnemyKind::Hazard),
    entry("Bowser",                 0x2D, EnemyKind::Hazard),
    entry("Unknown",                0xFF, EnemyKind::Unknown),
];

pub static STATIC_TILES: TileTable<StaticKind> = TileTable::new(STATIC_ENTRIES);
pub static ENEMY_TILES: TileTable<EnemyKind> = TileTable::new(ENEMY_ENTRIES);

/// Name reported for enemy bytes with no table entry.
pub const GENERIC_ENEMY_NAME: &str = "Generic_Enemy";

/// Classifies a raw metatile byte.
pub fn classify_static(raw: u8) -> TileClass {
    match STATIC_TILES.lookup(raw) {
        Some(TileEntry { kind: Fixed(category), .. }) => TileClass::Fixed(*category),
        Some(TileEntry { kind: Persisted, .. }) => TileClass::Persisted,
        None => TileClass::Dynamic(raw),
    }
}

/// Classifies a raw enemy identity byte; unlisted bytes are generic hazards.
pub fn classify_enemy(raw: u8) -> EnemyKind {
    ENEMY_TILES
        .lookup(raw)
        .map_or(EnemyKind::Hazard, |entry| entry.kind)
}

pub fn lookup_static_name(raw: u8) -> Option<&'static str> {
    STATIC_TILES.lookup(raw).map(|entry| entry.name)
}

pub fn lookup_enemy_name(raw: u8) -> &'static str {
    ENEMY_TILES
        .lookup(raw)
        .map_or(GENERIC_ENEMY_NAME, |entry| entry.name)
}
