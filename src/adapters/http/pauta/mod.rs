//! HTTP adapter for pauta endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CriarPautaRequest, ErrorResponse, NovaSessaoRequest, PautaResponse, SessaoResponse};
pub use handlers::PautaHandlers;
pub use routes::pauta_routes;
