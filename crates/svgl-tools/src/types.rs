//! Typed views of SVGL API records.
//!
//! The dispatcher itself treats upstream payloads as opaque JSON and never
//! validates or reshapes them; these types exist for embedders that want
//! structured access, and for round-trip assertions in tests.

use serde::{Deserialize, Serialize};

/// Per-theme asset routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeOptions {
    pub dark: String,
    pub light: String,
}

/// A route field: a single path, or one per theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SvgRoute {
    Plain(String),
    Themed(ThemeOptions),
}

/// A category field: one category, or several.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SvgCategory {
    Single(String),
    Multiple(Vec<String>),
}

/// One logo entry as served by the SVGL API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Svg {
    pub id: u32,
    pub title: String,
    pub category: SvgCategory,
    pub route: SvgRoute,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wordmark: Option<SvgRoute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_url: Option<String>,
}

/// A category with its logo count, from `/categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub category: String,
    pub total: u32,
}
