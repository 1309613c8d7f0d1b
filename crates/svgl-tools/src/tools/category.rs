//! List SVG logos in one category.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::client::SvglFetch;
use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Fetches the SVG logos of a single category.
///
/// The category is lowercased before the request regardless of the case the
/// caller supplied; the API only knows lowercase category routes.
pub struct GetSvgsByCategory {
    api: Arc<dyn SvglFetch>,
}

impl GetSvgsByCategory {
    pub fn new(api: Arc<dyn SvglFetch>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for GetSvgsByCategory {
    fn name(&self) -> &str {
        "get_svgs_by_category"
    }

    fn description(&self) -> &str {
        "Get SVG logos filtered by a specific category (e.g., 'software', 'framework', \
         'library', 'ai', 'database', etc.)"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "category": {
                    "type": "string",
                    "description": "The category to filter by (lowercase, e.g., 'software', 'framework', 'library')"
                }
            },
            "required": ["category"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let category = args.get_string("category")?;

        let url = format!(
            "{}/category/{}",
            self.api.base_url(),
            category.to_lowercase()
        );

        debug!("Listing '{}' SVGs from {}", category, url);

        let payload = self.api.fetch(&url).await?;
        Ok(ToolOutput::text(payload.into_text()?))
    }
}
