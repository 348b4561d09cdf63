//! netinv-engine - Orchestration layer
//!
//! Typed commands and queries applied against one scoped connection. Every
//! transport goes through this layer, so each operation has exactly one
//! implementation.

pub mod commands;
