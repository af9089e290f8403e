//! Data model: raw tables, page ranges, variants, frames, configuration.

pub mod config;
pub mod frame;
pub mod page;
pub mod table;
pub mod variant;

pub use config::{CollisionPolicy, HtsConfig};
pub use frame::{Cell, Frame};
pub use page::PageRange;
pub use table::RawTable;
pub use variant::DocumentVariant;
