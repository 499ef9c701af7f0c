pub(crate) mod common;
pub mod rest;
pub mod r#trait;
pub mod websocket;
