use serde::{Serialize, Deserialize};

use crate::config::game::{PRICE_STEP, RENT_STEP, STARTING_MONEY};

/// Index of a player in the game's player list.
pub type PlayerId = usize;

/// A purchasable board slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub position: usize,
    pub name: String,
    pub price: i64,
    pub rent: i64,
    pub owner: Option<PlayerId>,
}

impl Space {
    /// Build the unowned space for slot `position`.
    pub fn new(position: usize) -> Self {
        let step = position as i64 + 1;
        Self {
            position,
            name: format!("Property {:02}", position),
            price: step * PRICE_STEP,
            rent: step * RENT_STEP,
            owner: None,
        }
    }

    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub money: i64,
    pub position: usize,
    /// Board positions of owned spaces, in purchase order.
    pub properties: Vec<usize>,
}

impl Player {
    pub fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            money: STARTING_MONEY,
            position: 0,
            properties: Vec::new(),
        }
    }

    pub fn owns(&self, position: usize) -> bool {
        self.properties.contains(&position)
    }
}
