//! Analyzer client.
//!
//! Keep the public surface small: build a [`PokerAnalyzer`], hand it an
//! [`AnalysisRequest`](crate::types::AnalysisRequest), get text back.

pub mod builder;
pub mod core;

pub use builder::PokerAnalyzerBuilder;
pub use core::PokerAnalyzer;
