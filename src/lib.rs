//! Curhatin - a wellbeing companion for teenagers.
//!
//! Users check in their mood, keep a private journal, take the SRQ-29
//! self-report questionnaire and talk to either a counselor or an AI
//! companion. The crate follows a ports-and-adapters layout:
//!
//! - `domain` - entities, the SRQ-29 scorer and chat rules
//! - `ports` - traits for storage, text generation, auth and rate limiting
//! - `application` - one handler per operation
//! - `adapters` - axum, sqlx, Redis, OpenAI and in-memory implementations
//! - `config` - layered configuration from the environment

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
