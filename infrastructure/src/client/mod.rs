//! Directory gateways used by the `list` and `browse` commands.
//!
//! [`HttpDirectoryGateway`] talks to a running listing API; [`LocalDirectoryGateway`]
//! serves pages in-process from a repository, with identical semantics.

mod http;
mod local;

pub use http::HttpDirectoryGateway;
pub use local::LocalDirectoryGateway;
