//! Live queue-management board.
//!
//! A single [`dispatcher::Coordinator`] owns the ticket queue and the ticket being
//! served. Every connection receives an `init` snapshot when it opens and an
//! `update` snapshot after every command; admin commands only take effect on
//! connections that logged in with the shared secret.
pub mod broadcaster;
pub mod client;
pub mod config;
pub mod connection;
pub mod dispatcher;
pub mod error;
pub mod joint;
pub mod message;
pub mod response;
pub mod store;
pub mod ticket;
pub mod utils;
