//! Framework-agnostic client core.
//!
//! # Design
//! - Everything here compiles natively so it can be unit tested without a
//!   browser.
//! - DOM-bound code lives in `components`, `app`, and feature views.

pub mod config;
pub mod credentials;
pub mod error;
pub mod format;
pub mod gate;
pub mod http;
pub mod ledger;
pub mod notify;
pub mod optimistic;
pub mod runner;
pub mod scroll;
pub mod store;
pub mod telemetry;
pub mod validation;
