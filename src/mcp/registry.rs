//! Tool and Resource Registry
//!
//! The registry holds the authoritative catalog of tools and resources. It
//! is assembled once at startup, checked for internal consistency, and is
//! read-only while the server handles traffic, so lookups need no locking.

use serde_json::Value;
use thiserror::Error;

/// Errors raised while assembling the catalog. These are fatal at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate {kind} identifier: {identifier}")]
    DuplicateIdentifier {
        kind: &'static str,
        identifier: String,
    },

    #[error("tool {tool} references unregistered output template {uri}")]
    UnresolvedRenderTarget { tool: String, uri: String },
}

/// MCP behavior annotations advertised for a tool.
#[derive(Debug, Clone, Copy)]
pub struct BehaviorHints {
    pub destructive: bool,
    pub open_world: bool,
    pub read_only: bool,
}

/// Immutable description of one callable tool.
///
/// Descriptors are created once at startup and owned exclusively by the
/// registry; request handling only ever borrows them.
#[derive(Debug)]
pub struct ToolDescriptor {
    /// Unique, stable tool name.
    pub name: String,
    pub title: String,
    pub description: String,

    /// JSON schema the raw arguments are validated against before the
    /// handler runs.
    pub input_schema: Value,

    /// URI of the widget resource paired with this tool's output, if any.
    pub render_target: Option<String>,

    /// Display strings for the tool invocation lifecycle.
    pub invoking: String,
    pub invoked: String,

    pub hints: BehaviorHints,
}

/// Immutable description of one readable resource.
#[derive(Debug)]
pub struct ResourceDescriptor {
    /// Unique resource name.
    pub name: String,
    pub title: String,

    /// Resource URI, unique across the whole registry. Used only as an
    /// in-process lookup key, never dereferenced as a network URL.
    pub uri: String,

    pub mime_type: String,

    /// Content body, rendered once at registration time. For the widget
    /// this is static markup; the joke text is bound client-side.
    pub text: String,

    /// Extra `_meta` advertised alongside the resource.
    pub meta: Value,
}

/// Fixed catalog of tools and resources, keyed by name and URI respectively.
///
/// Registration order is preserved for listings. The tool and resource
/// namespaces are independent.
#[derive(Debug, Default)]
pub struct Registry {
    tools: Vec<ToolDescriptor>,
    resources: Vec<ResourceDescriptor>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tool to the catalog. Fails if the name is already taken.
    pub fn register_tool(&mut self, tool: ToolDescriptor) -> Result<(), RegistryError> {
        if self.tools.iter().any(|t| t.name == tool.name) {
            return Err(RegistryError::DuplicateIdentifier {
                kind: "tool",
                identifier: tool.name,
            });
        }
        self.tools.push(tool);
        Ok(())
    }

    /// Adds a resource to the catalog. Fails if the name or the URI is
    /// already taken.
    pub fn register_resource(&mut self, resource: ResourceDescriptor) -> Result<(), RegistryError> {
        if self.resources.iter().any(|r| r.name == resource.name) {
            return Err(RegistryError::DuplicateIdentifier {
                kind: "resource",
                identifier: resource.name,
            });
        }
        if self.resources.iter().any(|r| r.uri == resource.uri) {
            return Err(RegistryError::DuplicateIdentifier {
                kind: "resource",
                identifier: resource.uri,
            });
        }
        self.resources.push(resource);
        Ok(())
    }

    /// Verifies that every tool's render target resolves to a registered
    /// resource. Must pass before the server accepts traffic.
    pub fn finalize(self) -> Result<Self, RegistryError> {
        for tool in &self.tools {
            if let Some(uri) = &tool.render_target {
                if self.resolve_resource(uri).is_none() {
                    return Err(RegistryError::UnresolvedRenderTarget {
                        tool: tool.name.clone(),
                        uri: uri.clone(),
                    });
                }
            }
        }
        Ok(self)
    }

    pub fn resolve_tool(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| t.name == name)
    }

    pub fn resolve_resource(&self, uri: &str) -> Option<&ResourceDescriptor> {
        self.resources.iter().find(|r| r.uri == uri)
    }

    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    pub fn resources(&self) -> &[ResourceDescriptor] {
        &self.resources
    }
}
