//! List all SVG logos.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::client::SvglFetch;
use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Fetches every SVG logo the library knows about.
///
/// # Parameters
///
/// - `limit` (optional): maximum number of SVGs to return, 1 or more. The
///   value is forwarded to the API as-is; range enforcement is the
///   upstream's job.
pub struct GetAllSvgs {
    api: Arc<dyn SvglFetch>,
}

impl GetAllSvgs {
    pub fn new(api: Arc<dyn SvglFetch>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for GetAllSvgs {
    fn name(&self) -> &str {
        "get_all_svgs"
    }

    fn description(&self) -> &str {
        "Get all SVG logos from the SVGL library. Optionally limit the number of results."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "limit": {
                    "type": "number",
                    "description": "Optional limit on the number of SVGs to return",
                    "minimum": 1
                }
            }
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let limit = args.get_number_opt("limit")?;

        let url = match limit {
            Some(limit) => format!("{}?limit={}", self.api.base_url(), limit),
            None => self.api.base_url().to_string(),
        };

        debug!("Listing SVGs from {}", url);

        let payload = self.api.fetch(&url).await?;
        Ok(ToolOutput::text(payload.into_text()?))
    }
}
