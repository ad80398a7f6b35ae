use core::{fmt, ops::Index};

use crate::tile::Category;

/// Grid width in screen pixels.
pub const GRID_WIDTH: usize = 256;
/// Grid height in screen pixels.
pub const GRID_HEIGHT: usize = 240;
/// Edge length of a drawn block (one metatile).
pub const BLOCK_SIZE: i32 = 16;

/// 240x256 matrix of category codes, row-major, row 0 at the top of the screen.
///
/// Curated cells hold a [`Category`] code; dynamic metatiles hold their raw
/// byte. Indexing is `(x, y)`.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGrid {
    cells: Box<[u8]>,
}

impl TileGrid {
    /// An all-empty grid.
    pub fn new() -> Self {
        Self {
            cells: vec![Category::Empty.code(); GRID_WIDTH * GRID_HEIGHT].into_boxed_slice(),
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= GRID_WIDTH || y >= GRID_HEIGHT {
            return None;
        }
        Some(self.cells[y * GRID_WIDTH + x])
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.cells.chunks_exact(GRID_WIDTH)
    }

    /// Number of cells holding `code`.
    pub fn count(&self, code: u8) -> usize {
        self.cells.iter().filter(|&&cell| cell == code).count()
    }

    pub fn contains(&self, code: u8) -> bool {
        self.cells.contains(&code)
    }

    /// True when every cell is [`Category::Empty`].
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&cell| cell != Category::Empty.code())
    }

    pub fn clear(&mut self) {
        self.cells.fill(Category::Empty.code());
    }

    /// Fills the 16x16 block whose top-left corner is `(x, y)`.
    ///
    /// A negative `x` is clamped to column 0 and the block keeps its full
    /// width; rows above the top and anything past the right or bottom edge
    /// are clipped.
    pub fn fill_block(&mut self, x: i32, y: i32, value: u8) {
        let (cols, rows) = block_span(x, y);
        for row in rows {
            self.cells[row * GRID_WIDTH..][cols.clone()].fill(value);
        }
    }

    /// Copies the block [`fill_block`](Self::fill_block) would write at
    /// `(x, y)` from `source` into `self`.
    pub fn copy_block(&mut self, source: &TileGrid, x: i32, y: i32) {
        let (cols, rows) = block_span(x, y);
        for row in rows {
            let start = row * GRID_WIDTH;
            self.cells[start..][cols.clone()]
                .copy_from_slice(&source.cells[start..][cols.clone()]);
        }
    }
}

fn block_span(x: i32, y: i32) -> (core::ops::Range<usize>, core::ops::Range<usize>) {
    let left = x.max(0);
    let cols = clip(left, left.saturating_add(BLOCK_SIZE), GRID_WIDTH);
    let rows = clip(y.max(0), y.saturating_add(BLOCK_SIZE), GRID_HEIGHT);
    (cols, rows)
}

fn clip(start: i32, end: i32, limit: usize) -> core::ops::Range<usize> {
    let limit = limit as i32;
    let start = start.clamp(0, limit);
    let end = end.clamp(start, limit);
    start as usize..end as usize
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<(usize, usize)> for TileGrid {
    type Output = u8;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.cells[y * GRID_WIDTH + x]
    }
}

impl fmt::Debug for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TileGrid")
            .field("width", &GRID_WIDTH)
            .field("height", &GRID_HEIGHT)
            .field("non_empty", &(self.cells.len() - self.count(0)))
            .finish()
    }
}

/// Renders one character per 16x16 block, sampled at the block center.
impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = BLOCK_SIZE as usize;
        for y in (step / 2..GRID_HEIGHT).step_by(step) {
            for x in (step / 2..GRID_WIDTH).step_by(step) {
                let glyph = match Category::from_code(self[(x, y)]) {
                    Some(Category::Empty) => '.',
                    Some(Category::Solid) => '#',
                    Some(Category::Pipe) => '|',
                    Some(Category::Flagpole) => 'F',
                    Some(Category::QuestionBlock) => '?',
                    Some(Category::Coin) => 'o',
                    Some(Category::BreakableBlock) => 'B',
                    Some(Category::Enemy) => 'E',
                    Some(Category::Player) => 'M',
                    Some(Category::UsedBlock) => 'U',
                    Some(Category::Axe) => 'A',
                    None => '*',
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
