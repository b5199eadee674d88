use serde::{Deserialize, Serialize};

/// One player as read from the roster CSV.
///
/// All three fields are kept as text. The jersey number is never parsed as an
/// integer, so leading zeros and non-numeric tokens survive untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub number: String,
    pub first_name: String,
    pub last_name: String,
}

/// A unit-size placement slot in the gridster layout. Never mutated once
/// assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub row: u32,
    pub col: u32,
    pub size_x: u32,
    pub size_y: u32,
}

impl GridCell {
    pub fn new(row: u32, col: u32) -> Self {
        Self {
            row,
            col,
            size_x: 1,
            size_y: 1,
        }
    }
}

/// What a slot displays: nothing, a static caption, or a player card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotContent {
    Blank,
    Caption(String),
    Player(PlayerRecord),
}

/// One cell of the output lineup, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub cell: GridCell,
    pub content: SlotContent,
}

impl Slot {
    pub fn blank(cell: GridCell) -> Self {
        Self {
            cell,
            content: SlotContent::Blank,
        }
    }

    pub fn caption(cell: GridCell, text: impl Into<String>) -> Self {
        Self {
            cell,
            content: SlotContent::Caption(text.into()),
        }
    }

    pub fn player(cell: GridCell, player: PlayerRecord) -> Self {
        Self {
            cell,
            content: SlotContent::Player(player),
        }
    }
}

/// Output of the transform stage, handed to the load stage.
#[derive(Debug, Clone)]
pub struct TransformResult {
    pub slots: Vec<Slot>,
    pub fragments: Vec<String>,
    pub player_count: usize,
}
