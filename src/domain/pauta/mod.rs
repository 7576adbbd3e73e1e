//! Pauta domain module.
//!
//! Agenda items and the voting session attached to each of them.
//!
//! # Lifecycle
//!
//! ```text
//! NOT_STARTED --open--> OPEN --(deadline passes)--> CLOSED
//! ```
//!
//! A second `open` is rejected in both `OPEN` and `CLOSED`.
//!
//! # Events
//!
//! - `PautaCreated` - Published when a new pauta is stored
//! - `SessaoOpened` - Published when a session is opened

mod aggregate;
mod errors;
mod events;
mod sessao;

pub use aggregate::{Pauta, MAX_DESCRICAO_LENGTH, MAX_TITULO_LENGTH};
pub use errors::{PautaError, PAUTA_NOT_FOUND_MESSAGE, SESSAO_CONFLICT_MESSAGE};
pub use events::{PautaCreated, SessaoOpened};
pub use sessao::{
    Sessao, DEFAULT_DURATION_MINUTES, MAX_DURATION_MINUTES, MIN_DURATION_MINUTES,
};
