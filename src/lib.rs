//! chartgen: turn flat tabular records into renderer-ready chart
//! option trees.
//!
//! The core entry point is [`generate`]: give it a [`Dataset`], a
//! [`ChartKind`] and a [`ChartConfig`] and it returns a [`ChartSpec`],
//! a declarative option tree a chart widget consumes verbatim. The
//! whole pipeline is pure; nothing here touches a display.

pub mod assemble;
pub mod builder;
pub mod config;
pub mod data;
pub mod error;
pub mod infer;
pub mod palette;
pub mod preprocess;
pub mod protocol;
pub mod render;
pub mod spec;

pub use assemble::{generate, generate_with};
pub use config::{ChartConfig, ChartKind, SortOrder};
pub use data::{Dataset, Record};
pub use error::ChartError;
pub use palette::Palette;
pub use render::{RenderSurface, Renderer};
pub use spec::ChartSpec;
