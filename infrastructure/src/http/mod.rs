//! Listing API over HTTP.
//!
//! - `GET /api/advocates?page=&limit=` — one page of the roster
//! - `GET /health` — liveness probe
//!
//! The router is composable: [`advocates_router`] returns a `Router` that can
//! be mounted on any axum server; [`serve`] binds and runs it until shutdown.

mod error;
mod handlers;
mod router;
mod server;

pub use error::{ApiError, ErrorBody};
pub use handlers::AdvocatesQuery;
pub use router::{ApiContext, advocates_router};
pub use server::{ServerError, serve};
