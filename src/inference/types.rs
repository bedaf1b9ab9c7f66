use serde::Serialize;

use crate::config::GenerationConfig;

/// Returned when the service omits `summary_text` from a batch item.
pub const NO_SUMMARY_PLACEHOLDER: &str = "No summary generated.";

/// Request body for the hosted summarization pipeline.
#[derive(Debug, Serialize)]
pub struct SummarizeRequest<'a> {
    pub inputs: &'a str,
    pub parameters: GenerationParameters,
}

/// Generation settings, serialized with the names the service expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationParameters {
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
}

impl From<&GenerationConfig> for GenerationParameters {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            max_length: config.max_length,
            min_length: config.min_length,
            do_sample: config.do_sample,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_to_pipeline_shape() {
        let request = SummarizeRequest {
            inputs: "Some long article.",
            parameters: GenerationParameters::from(&GenerationConfig::default()),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "inputs": "Some long article.",
                "parameters": {"max_length": 130, "min_length": 30, "do_sample": false}
            })
        );
    }
}
