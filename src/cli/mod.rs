//! CLI infrastructure for the tiqtaq toolkit
//!
//! This module provides the command-line interface for playing games,
//! enumerating every game, reporting on saved outcome maps and inspecting
//! canonical forms.

pub mod commands;
pub mod config;
pub mod output;
