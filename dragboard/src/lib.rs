//! `Dragboard` — kanban board with live drag-and-drop reordering.
//!
//! The board model lives in `dragboard-core`. This crate owns the state
//! ([`board`]), the gesture handling ([`drag`]), the façade a view talks to
//! ([`controller`]), and a terminal host built on top of it.

pub mod app;
pub mod board;
pub mod config;
pub mod controller;
pub mod drag;
pub mod ui;

pub use controller::{BoardController, Overlay};
