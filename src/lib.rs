//! Champion draft scoring engine.
//!
//! Scores every undrafted champion against the current partial draft
//! and produces a ranked, explainable list. The engine is a pure
//! function of its inputs: catalog, counter matrix, and draft snapshot
//! in, deterministic 0-100 scores with justifications out.

pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod scoring;
