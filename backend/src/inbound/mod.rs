//! Inbound adapters exposing the domain over external protocols.

pub mod http;
