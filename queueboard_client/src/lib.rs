//! Terminal front-end for a queueboard server: keeps a local mirror of the board,
//! announces newly called tickets, and sends viewer and admin commands.
pub mod announcer;
pub mod event;
pub mod event_listener;
pub mod joint_client;
pub mod mirror;
pub mod shell;
pub mod ticket;
pub mod utils;
