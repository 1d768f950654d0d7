//! appdb: application database built from XDG `.desktop` entries.
//!
//! Scans `$XDG_DATA_HOME/applications` and then each
//! `$XDG_DATA_DIRS/applications` in order, parses every `*.desktop` file's
//! `[Desktop Entry]` group and keeps the first application seen for each name.

pub mod config;
pub mod error;
pub mod mapper;
pub mod matcher;
pub mod model;
pub mod parser;
pub mod sources;
pub mod text;

pub use error::{AppDbError, ParseError};
pub use model::{AppDb, AppEntry};
pub use sources::xdg::{LoadOptions, build, load, load_with, resolve_base_dirs};
pub use sources::{Environment, ProcessEnv};
