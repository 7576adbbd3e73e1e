//! Pauta command and query handlers.

mod create_pauta;
mod get_pauta;
mod list_pautas;
mod open_sessao;
mod view;

pub use create_pauta::{CreatePautaCommand, CreatePautaHandler, CreatePautaResult};
pub use get_pauta::{GetPautaHandler, GetPautaQuery};
pub use list_pautas::ListPautasHandler;
pub use open_sessao::{OpenSessaoCommand, OpenSessaoHandler, OpenSessaoResult};
pub use view::PautaView;
