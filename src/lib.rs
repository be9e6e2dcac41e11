//! Conversational assistant for the SoftSell marketing site.
//!
//! DESIGN
//! ======
//! The widget is self-contained in-memory state: a transcript, a
//! deterministic intent classifier, and a scheduler that delays replies
//! to mimic a live agent. Nothing touches the network or disk.

pub mod assistant;
pub mod command;
pub mod config;
pub mod render;
