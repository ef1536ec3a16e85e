//! VSOCK frame server and completion gateway.
//!
//! Accepts one pipe-delimited request per connection on a
//! hypervisor-local socket, validates it, drives the completion provider,
//! and writes a single JSON reply body back before closing.

#![deny(unsafe_code)]

pub mod codec;
pub mod gateway;
pub mod openai;
pub mod server;
pub mod validate;

pub use server::{ServerConfig, bind, handle_connection, serve};
