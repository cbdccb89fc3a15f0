//! Reusable UI widget components.
//!
//! This module contains styling helpers shared by the render functions.

pub mod styling;
