//! Core types and definitions for SHAPE SURVIVOR.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entity records, commands, state snapshots, events, constants and the
//! tuning configuration. It has no dependency on any terminal or runtime
//! framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
