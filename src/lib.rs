//! Grid snake game: a tick-driven state machine, a keyboard controller and a
//! renderer that draws onto any [`surface::DrawSurface`].
//!
//! The binary wires these to a ratatui terminal; the library half has no
//! terminal dependency beyond [`canvas::TerminalCanvas`] and the key mapping.

pub mod canvas;
pub mod config;
pub mod controller;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod surface;
pub mod terminal_runtime;
pub mod timer;
pub mod ui;
