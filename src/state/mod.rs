//! Session state module.
//!
//! This module contains the state of a viewing session, including:
//! - The closed set of pages and the navigation state
//! - The `State` record behind the terminal UI
//! - The arena that owns sessions by id
//! - State error handling

mod error;
mod navigation;
mod session;

pub use error::StateError;
pub use navigation::{Focus, NavigationState, Page};
pub use session::{SessionId, Sessions};

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::{State, PAGE_SCROLL};
