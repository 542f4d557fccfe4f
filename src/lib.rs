//! i18n-inject - translation wiring for React i18n hooks
//!
//! A CLI tool and library with two halves:
//!
//! - a source transform that finds the single argument-less call of an i18n
//!   hook or decorator (`useI18n()`, `withI18n()`) in each component file and
//!   injects an id, a fallback dictionary and a lazy translation loader built
//!   from the translation files next to the component;
//! - a request-scoped network context through which server-rendered code
//!   reads request headers and cookies and records status codes, redirects,
//!   response headers and cookies to send.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: The transform and the project-wide file pipeline around it
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `network`: Request/response context and hooks
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod network;
pub mod utils;
