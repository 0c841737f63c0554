#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod parser;
pub mod render;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, ReductionConfig};
pub use ir::{EdgeSpec, FloorplanInput};
pub use layout::{Analysis, Axis, Floorplan, FloorplanError, FloorplanResult, analyze};
pub use parser::{ParseError, parse_floorplan};
pub use render::render_text;
