//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, auth types)
//! - `assessment` - SRQ-29 scorer and stored results
//! - `chat` - Chat session aggregate and AI counselor texts
//! - `mood` - Mood check-ins
//! - `journal` - Journal entries
//! - `counselor` - Counselor directory
//! - `achievement` - Unlocked achievements

pub mod achievement;
pub mod assessment;
pub mod chat;
pub mod counselor;
pub mod foundation;
pub mod journal;
pub mod mood;
