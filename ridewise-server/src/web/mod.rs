//! Web layer for the ride comparison service.
//!
//! Provides HTTP endpoints for looking up trips and rendering ride cards.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router, status_for};
pub use state::AppState;
pub use templates::*;
