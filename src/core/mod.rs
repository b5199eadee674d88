pub mod engine;
pub mod layout;
pub mod pipeline;
pub mod render;
pub mod splice;

pub use crate::domain::model::{GridCell, PlayerRecord, Slot, SlotContent, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
