//! dropgrid
//!
//! Drag-and-drop reordering engine for a two-level content tree (groups of
//! columns, columns of opaque elements), plus a keyboard-driven TUI demo
//! editor.
//!
//! The crate follows a Pure Core / Impure Shell split: [`model`], [`index`],
//! [`target`], [`state`], and [`engine`] are pure and fully deterministic;
//! [`view`], [`sensor`], [`store`], and [`integration`] form the terminal
//! shell around them.

pub mod config;
pub mod engine;
pub mod index;
pub mod logging;
pub mod model;
pub mod sensor;
pub mod state;
pub mod store;
pub mod target;
pub mod view;

// Terminal event loop.
pub mod integration;
