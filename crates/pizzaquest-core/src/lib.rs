//! Core types and definitions for the Pizza Quest simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! positions, directions, entity kinds, components, input commands,
//! render notifications, snapshots, and tuning constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
