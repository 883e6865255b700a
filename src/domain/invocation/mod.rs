//! Invocation domain module: what the host hands in and what goes back out

mod request;
mod response;

pub use request::{InboundRequest, RequestHeaders};
pub use response::{OutboundResponse, ResponseBody, ServerlessResponse, JSON_CONTENT_TYPE};
