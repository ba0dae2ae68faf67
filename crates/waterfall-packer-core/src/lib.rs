//! Core library for waterfall (Pinterest-style) grid layout.
//!
//! - Packs an ordered sequence of per-item aspect ratios into N columns by
//!   always placing the next item into the currently shortest column.
//! - `pack` takes a config plus ratios and returns placements + content size
//! - Results answer viewport-culling and index-lookup queries; the data
//!   model is serde-serializable and JSON exporters are provided.
//!
//! Quick example:
//! ```
//! use waterfall_packer_core::{EdgeInsets, LayoutConfig, pack};
//! # fn main() -> waterfall_packer_core::Result<()> {
//! let cfg = LayoutConfig {
//!     columns: 2,
//!     insets: EdgeInsets::new(6.0, 20.0, 0.0, 20.0),
//!     spacing: 10.0,
//!     viewport_width: 340.0,
//! };
//! let result = pack(cfg, &[0.5, 0.3, 1.5, 0.7])?;
//! println!("content height: {}", result.content_size.height);
//! # Ok(()) }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod packer;
pub mod pipeline;

pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use packer::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `waterfall_packer_core::prelude::*` brings the primary APIs
/// into scope.
pub mod prelude {
    pub use crate::config::{LayoutConfig, LayoutConfigBuilder};
    pub use crate::model::{
        EdgeInsets, ItemPlacement, LayoutMeta, LayoutStats, PackingResult, Rect, Size,
    };
    pub use crate::packer::WaterfallPacker;
    pub use crate::pipeline::{AspectRatioSource, FnSource, pack, pack_with_source};
    pub use crate::{to_json_columns, to_json_items};
}
