//! Request handlers.

pub mod dispatch;
pub mod http;
pub mod websocket;
