use crate::domain::model::{GridCell, PlayerRecord, Slot};
use crate::utils::error::{Result, RosterError};

pub const LAYOUT_SPECIAL_GUEST: &str = "special-guest";
pub const LAYOUT_CAPTIONS: &str = "captions";

/// A pre-placed cell in the front zone, either blank or carrying a static
/// caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSlot {
    pub cell: GridCell,
    pub caption: Option<String>,
}

/// A cell held back for one specific player, matched by exact jersey number
/// and a substring of the first name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedSlot {
    pub cell: GridCell,
    pub number: String,
    pub first_name_contains: String,
}

/// Mapping from record order to grid cells. Both observed lineup layouts are
/// instances of this one policy; a custom one can be loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPolicy {
    pub fixed: Vec<FixedSlot>,
    pub reserved: Option<ReservedSlot>,
    pub pool_start_row: u32,
    pub pool_columns: u32,
}

impl LayoutPolicy {
    /// Court layout with cell (1,3) reserved for #15 Bella (front right).
    /// The front zone is three columns wide, the pool grid four.
    pub fn special_guest() -> Self {
        let mut fixed = Vec::new();
        for (row, cols) in [(1u32, 2u32), (2, 3), (3, 3)] {
            for col in 1..=cols {
                fixed.push(FixedSlot {
                    cell: GridCell::new(row, col),
                    caption: None,
                });
            }
        }

        Self {
            fixed,
            reserved: Some(ReservedSlot {
                cell: GridCell::new(1, 3),
                number: "15".to_string(),
                first_name_contains: "Bella".to_string(),
            }),
            pool_start_row: 4,
            pool_columns: 4,
        }
    }

    /// Four-column front zone of eleven cells, two of them labelled, no
    /// reserved cell.
    pub fn captions() -> Self {
        let mut fixed = Vec::new();
        for (row, cols) in [(1u32, 4u32), (2, 4), (3, 3)] {
            for col in 1..=cols {
                let caption = match (row, col) {
                    (1, 2) => Some("Front Center".to_string()),
                    (3, 2) => Some("Back Center".to_string()),
                    _ => None,
                };
                fixed.push(FixedSlot {
                    cell: GridCell::new(row, col),
                    caption,
                });
            }
        }

        Self {
            fixed,
            reserved: None,
            pool_start_row: 4,
            pool_columns: 4,
        }
    }

    pub fn named(name: &str) -> Result<Self> {
        match name {
            LAYOUT_SPECIAL_GUEST => Ok(Self::special_guest()),
            LAYOUT_CAPTIONS => Ok(Self::captions()),
            other => Err(RosterError::InvalidConfigValueError {
                field: "layout".to_string(),
                value: other.to_string(),
                reason: format!(
                    "Allowed values: {}, {}",
                    LAYOUT_SPECIAL_GUEST, LAYOUT_CAPTIONS
                ),
            }),
        }
    }

    /// Cell for the pool record at zero-based index `i`: column-major fill
    /// from (pool_start_row, 1), wrapping after `pool_columns` columns.
    pub fn pool_cell(&self, i: usize) -> GridCell {
        let i = i as u32;
        GridCell::new(
            self.pool_start_row + i / self.pool_columns,
            1 + i % self.pool_columns,
        )
    }

    /// Lays out every slot to render, in output order: fixed front zone,
    /// then the reserved guest if present, then the general pool.
    ///
    /// If the reserved predicate matches more than one record, the first
    /// match in input order wins and the rest stay in the pool. With no
    /// match, the reserved cell stays unfilled and pool placements do not
    /// shift.
    pub fn assign(&self, players: Vec<PlayerRecord>) -> Vec<Slot> {
        let mut slots: Vec<Slot> = self
            .fixed
            .iter()
            .map(|f| match &f.caption {
                Some(text) => Slot::caption(f.cell, text.clone()),
                None => Slot::blank(f.cell),
            })
            .collect();

        let mut pool = players;
        if let Some(reserved) = &self.reserved {
            let hit = pool
                .iter()
                .position(|p| {
                    p.number == reserved.number
                        && p.first_name.contains(&reserved.first_name_contains)
                });
            if let Some(i) = hit {
                let guest = pool.remove(i);
                slots.push(Slot::player(reserved.cell, guest));
            }
        }

        for (i, player) in pool.into_iter().enumerate() {
            slots.push(Slot::player(self.pool_cell(i), player));
        }

        slots
    }
}
