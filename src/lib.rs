pub mod assets;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod errors;
pub mod logging;
pub mod query;
pub mod render;
pub mod routes;
pub mod saved;
pub mod storage;
pub mod ui;

pub use jobtrack_common::{FilterField, FilterState, Job, SortMode};
