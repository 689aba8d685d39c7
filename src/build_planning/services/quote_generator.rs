use crate::build_planning::domain::QuoteMetadata;
use chrono::Utc;
use uuid::Uuid;

/// QuoteGenerator service for stamping exported build summaries
pub struct QuoteGenerator;

impl QuoteGenerator {
    /// Generates metadata with the current UTC timestamp and a fresh quote id
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> QuoteMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let quote_id = format!("urn:uuid:{}", Uuid::new_v4());

        QuoteMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            quote_id,
        )
    }

    /// Generates metadata naming this tool and its compile-time version
    pub fn generate_default_metadata() -> QuoteMetadata {
        Self::generate_metadata("pc-build-sim", env!("CARGO_PKG_VERSION"))
    }
}
