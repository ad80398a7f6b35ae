use crate::{error::DecodeError, memory::player as player_mem, ram::RamView};

/// Player coordinates supplied with every decoded frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerPosition {
    /// X inside the visible viewport.
    pub relative_x: i32,
    /// World y, growing upwards.
    pub absolute_y: i32,
    /// World x.
    pub absolute_x: i32,
}

impl PlayerPosition {
    /// Placeholder held by a renderer before the first position update.
    pub const UNINITIALIZED: Self = Self {
        relative_x: -1,
        absolute_y: -1,
        absolute_x: -1,
    };

    pub const fn new(relative_x: i32, absolute_y: i32, absolute_x: i32) -> Self {
        Self {
            relative_x,
            absolute_y,
            absolute_x,
        }
    }

    /// Derives the position from the player object fields in working RAM.
    ///
    /// The world y is mirrored so it grows upwards; once the player drops
    /// below the screen (vertical viewport 0) it continues past 255.
    pub fn from_ram(ram: &RamView<'_>) -> Self {
        let page = i32::from(ram.read(player_mem::LEVEL_PAGE));
        let x_in_page = ram.read(player_mem::X_IN_PAGE);
        let left_edge = ram.read(player_mem::SCREEN_LEFT_EDGE);
        let y_pixel = i32::from(ram.read(player_mem::Y_PIXEL));
        let absolute_y = if ram.read(player_mem::Y_VIEWPORT) < 1 {
            255 + (255 - y_pixel)
        } else {
            255 - y_pixel
        };
        Self {
            relative_x: i32::from(x_in_page.wrapping_sub(left_edge)),
            absolute_y,
            absolute_x: page * 0x100 + i32::from(x_in_page),
        }
    }

    /// Checks that every coordinate has been set to a positive value.
    pub fn validate(&self) -> Result<(), DecodeError> {
        for (field, value) in [
            ("relative_x", self.relative_x),
            ("absolute_y", self.absolute_y),
            ("absolute_x", self.absolute_x),
        ] {
            if value <= 0 {
                return Err(DecodeError::PositionUninitialized { field, value });
            }
        }
        Ok(())
    }

    /// World x of the left edge of the viewport.
    pub const fn viewport_origin(&self) -> i32 {
        self.absolute_x - self.relative_x
    }
}

impl Default for PlayerPosition {
    fn default() -> Self {
        Self::UNINITIALIZED
    }
}
