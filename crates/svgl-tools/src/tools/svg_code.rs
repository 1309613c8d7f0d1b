//! Fetch the SVG markup of one logo.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::client::SvglFetch;
use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Fetches the raw SVG code for a logo by filename.
///
/// # Parameters
///
/// - `filename` (required): the SVG filename, e.g. `react.svg`.
/// - `optimize` (optional, default true): whether the upstream should run
///   the markup through svgo. Anything other than the JSON literal `false`
///   counts as true; only an explicit `false` adds the `?no-optimize` flag.
///
/// The response body is returned verbatim; this tool never parses or
/// rewrites the markup.
pub struct GetSvgCode {
    api: Arc<dyn SvglFetch>,
}

impl GetSvgCode {
    pub fn new(api: Arc<dyn SvglFetch>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for GetSvgCode {
    fn name(&self) -> &str {
        "get_svg_code"
    }

    fn description(&self) -> &str {
        "Get the SVG code for a specific logo by filename"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "filename": {
                    "type": "string",
                    "description": "The SVG filename (e.g., 'adobe.svg', 'react.svg')"
                },
                "optimize": {
                    "type": "boolean",
                    "description": "Whether to optimize the SVG using svgo (default: true)",
                    "default": true
                }
            },
            "required": ["filename"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let filename = args.get_string("filename")?;
        let optimize = args.get_bool_or("optimize", true);

        let url = if optimize {
            format!("{}/svg/{}", self.api.base_url(), filename)
        } else {
            format!("{}/svg/{}?no-optimize", self.api.base_url(), filename)
        };

        debug!("Fetching SVG code from {}", url);

        let payload = self.api.fetch(&url).await?;
        Ok(ToolOutput::text(payload.into_text()?))
    }
}
