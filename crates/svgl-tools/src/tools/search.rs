//! Search SVG logos by title.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::client::SvglFetch;
use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Searches logos by title match.
///
/// The query is percent-encoded before it lands in the URL, so spaces and
/// reserved characters are safe.
pub struct SearchSvgs {
    api: Arc<dyn SvglFetch>,
}

impl SearchSvgs {
    pub fn new(api: Arc<dyn SvglFetch>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for SearchSvgs {
    fn name(&self) -> &str {
        "search_svgs"
    }

    fn description(&self) -> &str {
        "Search for SVG logos by title/name"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query to match against SVG titles"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let query = args.get_string("query")?;

        let url = format!(
            "{}?search={}",
            self.api.base_url(),
            urlencoding::encode(&query)
        );

        debug!("Searching SVGs: {}", url);

        let payload = self.api.fetch(&url).await?;
        Ok(ToolOutput::text(payload.into_text()?))
    }
}
