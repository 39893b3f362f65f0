//! Startup Catalog
//!
//! Builds the fixed set of tools and resources before the server accepts
//! traffic. The registry is read-only after this point.

use serde_json::json;

use super::corpus::JokeCorpus;
use super::widget::{widget_html, WidgetConfig};
use crate::mcp::models::{
    COUNT_RESOURCE_NAME, COUNT_RESOURCE_URI, JOKE_TOOL_NAME, RANDOM_JOKE_TOOL_NAME,
    WIDGET_MIME_TYPE, WIDGET_RESOURCE_NAME, WIDGET_TEMPLATE_URI,
};
use crate::mcp::registry::{
    BehaviorHints, Registry, RegistryError, ResourceDescriptor, ToolDescriptor,
};

/// Both joke tools are pure lookups against a fixed corpus.
const READ_ONLY: BehaviorHints = BehaviorHints {
    destructive: false,
    open_world: false,
    read_only: true,
};

/// Registers the joke tools and resources and verifies catalog consistency.
pub fn build_registry(
    corpus: &JokeCorpus,
    widget: &WidgetConfig,
) -> Result<Registry, RegistryError> {
    let count = corpus.count();
    let mut registry = Registry::new();

    registry.register_resource(ResourceDescriptor {
        name: COUNT_RESOURCE_NAME.into(),
        title: "Jokes Count Resource".into(),
        uri: COUNT_RESOURCE_URI.into(),
        mime_type: "text/plain".into(),
        text: format!("I know {count} jokes"),
        meta: json!({}),
    })?;

    registry.register_resource(ResourceDescriptor {
        name: WIDGET_RESOURCE_NAME.into(),
        title: "Joke Widget".into(),
        uri: WIDGET_TEMPLATE_URI.into(),
        mime_type: WIDGET_MIME_TYPE.into(),
        text: widget_html(widget),
        meta: json!({ "openai/widgetPrefersBorder": true }),
    })?;

    registry.register_tool(ToolDescriptor {
        name: JOKE_TOOL_NAME.into(),
        title: "Joke Teller".into(),
        description: format!(
            "Tells a joke according to its index. Valid ids 0-{}",
            count.saturating_sub(1)
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "integer",
                    "minimum": 0,
                    "maximum": count.saturating_sub(1),
                    "description": "joke id"
                }
            },
            "required": ["id"],
            "additionalProperties": false
        }),
        render_target: Some(WIDGET_TEMPLATE_URI.into()),
        invoking: "Displaying a joke".into(),
        invoked: "Displayed a joke".into(),
        hints: READ_ONLY,
    })?;

    registry.register_tool(ToolDescriptor {
        name: RANDOM_JOKE_TOOL_NAME.into(),
        title: "Random Joke Teller".into(),
        description: "Tells a random joke".into(),
        input_schema: json!({
            "type": "object",
            "properties": {},
            "additionalProperties": false
        }),
        render_target: Some(WIDGET_TEMPLATE_URI.into()),
        invoking: "Displaying a joke".into(),
        invoked: "Displayed a joke".into(),
        hints: READ_ONLY,
    })?;

    registry.finalize()
}
