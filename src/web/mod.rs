//! Web server module
//!
//! Serves the search form and renders results.

mod handlers;
mod routes;
mod state;
mod templates;

pub use handlers::{IndexPage, SearchForm};
pub use routes::create_router;
pub use state::AppState;
pub use templates::Templates;
