// ABOUTME: MCP wire schema types for tools, prompts and tool call results
// ABOUTME: JsonSchema/PropertySchema declare each tool's static input signature
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! MCP schema definitions

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Property declaration inside a tool input schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySchema {
    /// JSON type (`string`, `integer`, `number`, `boolean`, `object`)
    #[serde(rename = "type")]
    pub property_type: String,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Default applied when the argument is omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Allowed values
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl PropertySchema {
    /// Property with a type and description
    #[must_use]
    pub fn new(property_type: &str, description: &str) -> Self {
        Self {
            property_type: property_type.to_owned(),
            description: Some(description.to_owned()),
            default: None,
            enum_values: None,
        }
    }

    /// Attach a default value
    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    /// Restrict to an enumerated set of strings
    #[must_use]
    pub fn with_enum(mut self, values: &[&str]) -> Self {
        self.enum_values = Some(values.iter().map(|&v| v.to_owned()).collect());
        self
    }
}

/// JSON Schema describing a tool's arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonSchema {
    /// Always `object` for tool inputs
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Argument declarations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, PropertySchema>>,
    /// Names of required arguments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl JsonSchema {
    /// Object schema from named properties and the names that are required
    #[must_use]
    pub fn object(properties: Vec<(&str, PropertySchema)>, required: &[&str]) -> Self {
        Self {
            schema_type: "object".to_owned(),
            properties: Some(
                properties
                    .into_iter()
                    .map(|(name, property)| (name.to_owned(), property))
                    .collect(),
            ),
            required: Some(required.iter().map(|&name| name.to_owned()).collect()),
        }
    }
}

/// Behavior hints attached to a listed tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolAnnotations {
    /// The tool never modifies anything
    pub read_only_hint: bool,
    /// The tool reaches an external service
    pub open_world_hint: bool,
}

/// Tool entry returned by `tools/list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSchema {
    /// Unique tool name
    pub name: String,
    /// Tool description
    pub description: String,
    /// Argument schema
    pub input_schema: JsonSchema,
    /// Behavior hints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<ToolAnnotations>,
}

/// Content block in a tool result or prompt message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    /// Plain text
    Text {
        /// Text body
        text: String,
    },
}

impl Content {
    /// Text content block
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Text body of this block
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text { text } => text,
        }
    }
}

/// Result of `tools/call`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResponse {
    /// Content blocks
    pub content: Vec<Content>,
    /// True when the tool failed
    pub is_error: bool,
    /// Machine-readable copy of the result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_content: Option<Value>,
}

/// Prompt argument declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptArgument {
    /// Argument name
    pub name: String,
    /// Description
    pub description: String,
    /// Whether the argument must be supplied
    pub required: bool,
}

/// Prompt entry returned by `prompts/list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSchema {
    /// Prompt name
    pub name: String,
    /// Description
    pub description: String,
    /// Declared arguments
    pub arguments: Vec<PromptArgument>,
}

/// One message of a rendered prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    /// Always `user` for templates
    pub role: String,
    /// Message body
    pub content: Content,
}

/// Result of `prompts/get`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPromptResult {
    /// Prompt description
    pub description: String,
    /// Rendered messages
    pub messages: Vec<PromptMessage>,
}
