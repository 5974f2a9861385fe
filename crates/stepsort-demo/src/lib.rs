#![forbid(unsafe_code)]

//! Terminal driver for the stepsort engine.
//!
//! Plays every collaborator role the engine leaves open: maps keys to
//! commands, paces ticks, draws bars and a HUD with crossterm, and reports the
//! pitch an audio backend would play for the current mailbox value.

pub mod app;
pub mod cli;
pub mod input;
pub mod logging;
pub mod pacing;
pub mod render;
pub mod terminal;
