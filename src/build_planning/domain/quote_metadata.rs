/// QuoteMetadata value object stamped onto exported build summaries
#[derive(Debug, Clone)]
pub struct QuoteMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    quote_id: String,
}

impl QuoteMetadata {
    pub fn new(timestamp: String, tool_name: String, tool_version: String, quote_id: String) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            quote_id,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn quote_id(&self) -> &str {
        &self.quote_id
    }
}
