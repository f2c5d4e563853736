//! Application layer: the session controller.

mod session;

pub use session::ReviewSession;
