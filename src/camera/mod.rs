//! Camera system for the editor viewport.
//!
//! Provides a perspective camera placed by position and Euler orientation,
//! and the fly controller that moves it from accumulated input.

/// First-person fly controller driven by keys and mouse drag.
pub mod controller;
/// Core camera struct and Euler orientation.
pub mod core;

pub use self::controller::FlyController;
pub use self::core::{Euler, PerspectiveCamera};
