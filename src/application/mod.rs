//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (create, open) are kept apart from query handlers
//! (get, list).

pub mod handlers;

pub use handlers::{
    CreatePautaCommand, CreatePautaHandler, CreatePautaResult, GetPautaHandler, GetPautaQuery,
    ListPautasHandler, OpenSessaoCommand, OpenSessaoHandler, OpenSessaoResult, PautaView,
};
