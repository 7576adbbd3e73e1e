//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod pauta;

pub use pauta::{
    CreatePautaCommand, CreatePautaHandler, CreatePautaResult, GetPautaHandler, GetPautaQuery,
    ListPautasHandler, OpenSessaoCommand, OpenSessaoHandler, OpenSessaoResult, PautaView,
};
