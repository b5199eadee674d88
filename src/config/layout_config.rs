use crate::core::layout::{FixedSlot, LayoutPolicy, ReservedSlot};
use crate::domain::model::GridCell;
use crate::utils::error::{Result, RosterError};
use serde::{Deserialize, Serialize};

/// Custom layout policy loaded from a TOML file, for lineups neither named
/// variant covers.
///
/// ```toml
/// [grid]
/// pool_start_row = 4
/// pool_columns = 4
///
/// [[fixed]]
/// row = 1
/// col = 1
///
/// [[fixed]]
/// row = 1
/// col = 2
/// caption = "Front Center"
///
/// [reserved]
/// row = 1
/// col = 3
/// number = "15"
/// first_name_contains = "Bella"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub grid: GridSection,
    #[serde(default)]
    pub fixed: Vec<FixedSection>,
    pub reserved: Option<ReservedSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSection {
    pub pool_start_row: u32,
    pub pool_columns: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedSection {
    pub row: u32,
    pub col: u32,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservedSection {
    pub row: u32,
    pub col: u32,
    pub number: String,
    pub first_name_contains: String,
}

impl LayoutConfig {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn into_policy(self) -> Result<LayoutPolicy> {
        validate_coordinate("grid.pool_start_row", self.grid.pool_start_row)?;
        validate_coordinate("grid.pool_columns", self.grid.pool_columns)?;

        let mut fixed = Vec::with_capacity(self.fixed.len());
        for section in self.fixed {
            validate_coordinate("fixed.row", section.row)?;
            validate_coordinate("fixed.col", section.col)?;
            fixed.push(FixedSlot {
                cell: GridCell::new(section.row, section.col),
                caption: section.caption,
            });
        }

        let reserved = match self.reserved {
            Some(section) => {
                validate_coordinate("reserved.row", section.row)?;
                validate_coordinate("reserved.col", section.col)?;
                Some(ReservedSlot {
                    cell: GridCell::new(section.row, section.col),
                    number: section.number,
                    first_name_contains: section.first_name_contains,
                })
            }
            None => None,
        };

        Ok(LayoutPolicy {
            fixed,
            reserved,
            pool_start_row: self.grid.pool_start_row,
            pool_columns: self.grid.pool_columns,
        })
    }
}

fn validate_coordinate(field: &str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(RosterError::InvalidConfigValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: "Grid coordinates start at 1".to_string(),
        });
    }
    Ok(())
}
