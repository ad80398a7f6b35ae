mod common;

use common::RamBuilder;
use proptest::prelude::*;
use smbtile_core::{
    Category, PlayerPosition, TileGrid, TileRenderer,
    memory::{RAM_SIZE, enemy as enemy_mem},
    tile::lookup_static_name,
};

const HIDDEN_BLOCK: u8 = 0x60;

fn position_strategy() -> impl Strategy<Value = PlayerPosition> {
    (1i32..=255, 1i32..=400, 0i32..=4096).prop_map(|(relative_x, absolute_y, scroll)| {
        PlayerPosition::new(relative_x, absolute_y, relative_x + scroll)
    })
}

fn ram_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), RAM_SIZE..=RAM_SIZE)
}

fn grid_strategy() -> impl Strategy<Value = TileGrid> {
    prop::collection::vec((0usize..16, 0usize..15, 0u8..=10), 0..40).prop_map(|blocks| {
        let mut grid = TileGrid::new();
        for (col, row, code) in blocks {
            grid.fill_block(col as i32 * 16, row as i32 * 16, code);
        }
        grid
    })
}

proptest! {
    #[test]
    fn decoding_is_deterministic(
        ram in ram_strategy(),
        position in position_strategy(),
        seed in grid_strategy(),
    ) {
        let mut a = TileRenderer::default();
        let mut b = TileRenderer::default();
        a.reset_to(seed.clone());
        b.reset_to(seed);

        let first = a.decode(&ram, position).expect("decode");
        let second = b.decode(&ram, position).expect("decode");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn non_positive_positions_never_decode(
        ram in ram_strategy(),
        position in position_strategy(),
        field in 0usize..3,
        bad in -1000i32..=0,
    ) {
        let mut position = position;
        match field {
            0 => position.relative_x = bad,
            1 => position.absolute_y = bad,
            _ => position.absolute_x = bad,
        }
        let mut renderer = TileRenderer::default();
        prop_assert!(renderer.decode(&ram, position).is_err());
        prop_assert!(renderer.last_grid().is_empty());
    }

    #[test]
    fn status_rows_are_always_empty(
        ram in ram_strategy(),
        relative_x in 1i32..=255,
        absolute_y in 1i32..=240,
        scroll in 0i32..=4096,
    ) {
        let mut ram = ram;
        ram[enemy_mem::ACTIVE as usize..][..enemy_mem::SLOT_COUNT].fill(0);
        let position = PlayerPosition::new(relative_x, absolute_y, relative_x + scroll);

        let mut renderer = TileRenderer::default();
        let grid = renderer.decode(&ram, position).expect("decode");
        for row in grid.rows().take(32) {
            prop_assert!(row.iter().all(|&cell| cell == Category::Empty.code()));
        }
    }

    #[test]
    fn unlisted_bytes_pass_through(
        raw in any::<u8>().prop_filter("curated byte", |raw| lookup_static_name(*raw).is_none()),
        col in 2i32..16,
        row in 0i32..11,
    ) {
        let ram = RamBuilder::new()
            .tile(col * 16, 32 + row * 16, raw)
            .expect("tile")
            .build();
        let mut renderer = TileRenderer::default();
        let grid = renderer
            .decode(&ram, PlayerPosition::new(8, 40, 8))
            .expect("decode");

        let (x, y) = ((col * 16) as usize, (32 + row * 16) as usize);
        prop_assert_eq!(grid[(x, y)], raw);
        prop_assert_eq!(grid[(x + 15, y + 15)], raw);
    }

    #[test]
    fn persisted_cells_copy_the_previous_grid(
        seed in grid_strategy(),
        cells in prop::collection::vec((0i32..16, 0i32..11), 1..12),
    ) {
        let mut builder = RamBuilder::new();
        for &(col, row) in &cells {
            builder = builder.tile(col * 16, 32 + row * 16, HIDDEN_BLOCK).expect("tile");
        }
        let ram = builder.build();

        let mut renderer = TileRenderer::default();
        renderer.reset_to(seed.clone());
        let grid = renderer
            .decode(&ram, PlayerPosition::new(8, 40, 8))
            .expect("decode");

        for (col, row) in cells {
            let (x0, y0) = ((col * 16) as usize, (32 + row * 16) as usize);
            for y in y0..y0 + 16 {
                for x in x0..x0 + 16 {
                    prop_assert_eq!(grid[(x, y)], seed[(x, y)]);
                }
            }
        }
    }
}
