//! Curvecast Core — series ingestion, curve fitting, price prediction.
//!
//! This crate contains the whole data-to-estimate pipeline:
//! - Domain types (day ordinals, range codes, the parallel-column series)
//! - Quote source trait with a blocking chartapi implementation
//! - All-or-nothing series parser
//! - QR-based least-squares fitting (degree-5 polynomial + OLS line)
//! - The Empty → Loaded → Fitted pipeline state machine

pub mod data;
pub mod domain;
pub mod fit;
pub mod pipeline;
