//! Loadtest command handlers.
//!
//! This module contains handlers for the loadtest populate commands.

pub mod populate;
