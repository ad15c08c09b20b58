//! The per-worker HTTP request and the URL gate that runs before dispatch.
mod port;
mod validate;
mod worker;


pub use port::{ReqwestPort, RequestPort};
pub use validate::validate_url;
pub use worker::run_worker;
