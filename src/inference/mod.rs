//! Remote summarization inference.

mod client;
mod error;
mod response;
mod types;

use std::future::Future;

pub use client::SummarizerClient;
pub use error::{ClientError, SummarizeError};
pub use response::{classify_response, parse_body};
pub use types::{GenerationParameters, SummarizeRequest, NO_SUMMARY_PLACEHOLDER};

/// Something that turns text into a summary.
///
/// Implemented by [`SummarizerClient`]; the session loop only depends on this
/// trait.
pub trait Summarize {
    fn summarize(&self, text: &str) -> impl Future<Output = Result<String, SummarizeError>>;
}
