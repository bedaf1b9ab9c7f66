//! Command-line text summarizer backed by a hosted BART model.
//!
//! The [`inference`] client sends text to the summarization endpoint and
//! classifies the response; [`session`] drives the interactive loop and
//! prints each summary with its [`stats`].

pub mod config;
pub mod inference;
pub mod logging;
pub mod session;
pub mod stats;
