//! Board generation.
//!
//! The board is a fixed row of `BOARD_SIZE` slots. Slots at multiples of
//! `FREE_TILE_INTERVAL` are free tiles and hold no space.

use crate::config::game::{BOARD_SIZE, FREE_TILE_INTERVAL};
use crate::game::types::Space;

pub type Board = Vec<Option<Space>>;

pub fn generate_board() -> Board {
    (0..BOARD_SIZE)
        .map(|position| is_purchasable(position).then(|| Space::new(position)))
        .collect()
}

/// Returns true if the slot can ever hold a purchasable space.
pub fn is_purchasable(position: usize) -> bool {
    position < BOARD_SIZE && position % FREE_TILE_INTERVAL != 0
}
