//! CLI subcommand modules.
//!
//! This module contains the implementations for all narrate CLI subcommands.

pub(crate) mod describe;
pub(crate) mod sample;
pub(crate) mod signals;
