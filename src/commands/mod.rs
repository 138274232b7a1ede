//! Command handlers, one module per operation.

pub mod access;
pub mod apply;
pub mod destroy;
pub mod init;
pub mod kubectl;
pub mod plan;
pub mod show;
