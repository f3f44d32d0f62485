//! kvdesk-ui - Pure view components for the console
//!
//! Every view takes plain data and event handlers as props. None of them
//! talk to the backend or own state beyond transient widget state; the web
//! crate wires them to the dispatcher.

pub mod components;

pub use components::*;
