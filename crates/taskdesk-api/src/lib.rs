//! Request routing and the five task operations.
//!
//! The entry point is [`Dispatcher::handle`]: it takes an abstract
//! HTTP-like [`Request`], resolves it to a [`Route`], runs the matching
//! operation against the injected record store, and always comes back with
//! a well-formed [`Envelope`], whatever went wrong along the way.

mod error;
pub use error::ApiError;

mod envelope;
pub use envelope::{Envelope, Headers};

mod request;
pub use request::{Request, parse_body};

mod route;
pub use route::{Route, RouteError};

mod ops;
pub use ops::TaskOps;

mod dispatch;
pub use dispatch::Dispatcher;
