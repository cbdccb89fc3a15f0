//! Terminal viewer for the game-login ETL documentation.
//!
//! Four pages of setup notes are shown beside a sidebar selector, together
//! with the two result tables the pipeline produces.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod events;
pub mod logger;
pub mod pages;
pub mod router;
pub mod state;
pub mod tables;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
