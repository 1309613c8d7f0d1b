//! List available categories.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::client::SvglFetch;
use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Fetches all categories with their logo counts.
pub struct GetCategories {
    api: Arc<dyn SvglFetch>,
}

impl GetCategories {
    pub fn new(api: Arc<dyn SvglFetch>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for GetCategories {
    fn name(&self) -> &str {
        "get_categories"
    }

    fn description(&self) -> &str {
        "Get the list of all available categories with their SVG counts"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let url = format!("{}/categories", self.api.base_url());

        debug!("Listing categories from {}", url);

        let payload = self.api.fetch(&url).await?;
        Ok(ToolOutput::text(payload.into_text()?))
    }
}
