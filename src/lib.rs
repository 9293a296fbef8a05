//! Extracts, classifies and pages the HTTP(S) media links buried in large
//! opaque cache files.

pub mod catalog;
pub mod chunk;
pub mod cli;
pub mod config;
pub mod constants;
pub mod evidence;
pub mod export;
pub mod links;
pub mod logging;
pub mod pipeline;
pub mod presets;
pub mod scanner;
pub mod util;
