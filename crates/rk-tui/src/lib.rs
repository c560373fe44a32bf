//! Terminal front end for Riddlekeys.
//!
//! Captures keys with crossterm, feeds them to the session engine, drives
//! the one-second countdown while the player is typing, and draws each
//! state of the game with ratatui.

pub mod app;
pub mod cadence;
pub mod screens;
pub mod shared;
pub mod terminal;
