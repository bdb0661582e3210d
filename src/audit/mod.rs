mod client;
mod wire;

pub(crate) use client::{AuditClient, AuditError};
