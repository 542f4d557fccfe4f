//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes the transform to AI assistants over stdio so they can inspect
//! which calls a project would have rewritten, and how.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameters and result types

mod server;
pub mod types;

pub use server::{I18nInjectMcpServer, run_server};
