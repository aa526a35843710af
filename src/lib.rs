//! MCP server exposing GitHub repository operations as tools.
//!
//! Reads files and directory listings, lists repositories, branches and pull
//! requests, and writes commits, branches, file updates and pull requests.

pub mod client;
pub mod config;
pub mod encoding;
pub mod error;
pub mod ops;
pub mod server;
