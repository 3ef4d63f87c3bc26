//! # partdb-server
//!
//! HTTP gateway for the Part-DB CSV exporter.
//!
//! Every route sits behind a Basic-Auth middleware that verifies
//! credentials against the Part-DB user table. Authenticated requests
//! are dispatched by exact path: the two export routes stream CSV,
//! everything else gets the landing page. Clients only ever see
//! generic error bodies; the diagnostic detail goes to the log.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::GatewayError;
pub use routes::create_router;
pub use state::AppState;
