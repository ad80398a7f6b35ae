use crate::{memory::enemy as enemy_mem, ram::RamView};

/// One live enemy slot as read from RAM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyRecord {
    /// Slot index in `0..SLOT_COUNT`.
    pub slot: usize,
    /// Raw identity byte.
    pub id: u8,
    /// World x: `page * 256 + x_in_page`.
    pub world_x: i32,
    /// Vertical screen position.
    pub screen_y: i32,
}

/// Yields every active enemy slot in ascending slot order.
///
/// Slots whose active flag is clear are skipped even when their other tables
/// still hold data from a previous occupant.
pub fn locate_enemies(ram: RamView<'_>) -> impl Iterator<Item = EnemyRecord> {
    (0..enemy_mem::SLOT_COUNT).filter_map(move |slot| {
        if ram.read_indexed(enemy_mem::ACTIVE, slot) == 0 {
            return None;
        }
        let page = i32::from(ram.read_indexed(enemy_mem::LEVEL_PAGE, slot));
        let x_in_page = i32::from(ram.read_indexed(enemy_mem::X_IN_PAGE, slot));
        Some(EnemyRecord {
            slot,
            id: ram.read_indexed(enemy_mem::TYPE, slot),
            world_x: page * 0x100 + x_in_page,
            screen_y: i32::from(ram.read_indexed(enemy_mem::SCREEN_Y, slot)),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::RAM_SIZE;

    fn with_slot(bytes: &mut [u8], slot: usize, id: u8, page: u8, x: u8, y: u8) {
        bytes[enemy_mem::TYPE as usize + slot] = id;
        bytes[enemy_mem::LEVEL_PAGE as usize + slot] = page;
        bytes[enemy_mem::X_IN_PAGE as usize + slot] = x;
        bytes[enemy_mem::SCREEN_Y as usize + slot] = y;
    }

    #[test]
    fn no_active_slots_yield_nothing() {
        let mut bytes = [0u8; RAM_SIZE];
        with_slot(&mut bytes, 0, 0x06, 1, 2, 3);
        let ram = RamView::new(&bytes).expect("ram");
        assert_eq!(locate_enemies(ram).count(), 0);
    }

    #[test]
    fn active_slots_combine_page_and_offset() {
        let mut bytes = [0u8; RAM_SIZE];
        with_slot(&mut bytes, 1, 0x06, 2, 0x10, 0x90);
        with_slot(&mut bytes, 4, 0x0D, 0, 0xF0, 0x40);
        bytes[enemy_mem::ACTIVE as usize + 1] = 1;
        bytes[enemy_mem::ACTIVE as usize + 4] = 1;
        let ram = RamView::new(&bytes).expect("ram");

        let enemies: Vec<_> = locate_enemies(ram).collect();
        assert_eq!(
            enemies,
            vec![
                EnemyRecord {
                    slot: 1,
                    id: 0x06,
                    world_x: 0x210,
                    screen_y: 0x90,
                },
                EnemyRecord {
                    slot: 4,
                    id: 0x0D,
                    world_x: 0xF0,
                    screen_y: 0x40,
                },
            ]
        );
    }

    #[test]
    fn never_yields_more_than_five() {
        let bytes = [1u8; RAM_SIZE];
        let ram = RamView::new(&bytes).expect("ram");
        assert_eq!(locate_enemies(ram).count(), enemy_mem::SLOT_COUNT);
    }
}
