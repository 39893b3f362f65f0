//! Dad Jokes MCP Server Library
//!
//! This library provides the core functionality for a dad-jokes widget server
//! with MCP (Model Context Protocol) support.

// Domain modules
pub mod jokes;
pub mod mcp;

// Infrastructure
pub mod router;
