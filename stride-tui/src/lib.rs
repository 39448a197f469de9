//! Stride TUI library exports.

pub mod api_client;
pub mod config;
pub mod error;
pub mod events;
pub mod keys;
pub mod session;
pub mod state;
pub mod views;
