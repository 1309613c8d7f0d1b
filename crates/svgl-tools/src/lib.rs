//! Tool registry and API client for the SVGL MCP server.
//!
//! This crate provides a [`ToolRegistry`] that exposes the SVGL SVG-logo
//! catalog (<https://api.svgl.app>) as a fixed set of named tools. Each tool
//! declares a JSON input schema, validates its required arguments, and
//! translates one call into exactly one HTTP GET against the API.
//!
//! # Architecture
//!
//! - [`SvglClient`] performs the fetch: one GET per call, typed failure on
//!   non-2xx, JSON or raw-text body depending on the endpoint. The
//!   [`SvglFetch`] trait is the seam that lets tests substitute a stub.
//! - [`ToolRegistry`] owns dispatch: name lookup, argument validation via
//!   [`ToolArgs`], and normalization of every failure into the
//!   `{isError: true}` result envelope. Callers distinguish failure only by
//!   `isError`; the message text is the whole diagnostic surface.
//!
//! # Built-in Tools
//!
//! - [`GetAllSvgs`] - all logos, with an optional `limit`.
//! - [`GetSvgsByCategory`] - logos of one category (lowercased locally).
//! - [`GetSvgCode`] - raw SVG markup for a filename, optionally unoptimized.
//! - [`SearchSvgs`] - title search, query percent-encoded.
//! - [`GetCategories`] - all categories with their logo counts.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use std::sync::Arc;
//! use svgl_tools::{default_registry, SvglClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let registry = default_registry(Arc::new(SvglClient::new()));
//!
//!     let mut args = HashMap::new();
//!     args.insert("query".to_string(), "react".into());
//!
//!     let result = registry.call("search_svgs", args).await;
//!     println!("{}", result.content[0].text);
//! }
//! ```

mod client;
mod error;
mod registry;
mod tool;
pub mod tools;
pub mod types;

pub use client::{ApiPayload, SvglClient, SvglFetch, API_BASE_URL};
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use tool::{CallToolResult, Tool, ToolArgs, ToolContent, ToolDefinition, ToolOutput};
pub use tools::{GetAllSvgs, GetCategories, GetSvgCode, GetSvgsByCategory, SearchSvgs};

// Re-export async_trait for downstream Tool implementations.
pub use async_trait::async_trait;

use std::sync::Arc;

/// Create a registry with all SVGL tools registered, in their advertised
/// order, sharing the given API client.
pub fn default_registry(api: Arc<dyn SvglFetch>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(GetAllSvgs::new(api.clone()));
    registry.register(GetSvgsByCategory::new(api.clone()));
    registry.register(GetSvgCode::new(api.clone()));
    registry.register(SearchSvgs::new(api.clone()));
    registry.register(GetCategories::new(api));

    registry
}
