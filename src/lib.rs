pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod validation;

pub use router::create_router;
pub use services::calculator::{calculate_packs, PackCalculator};
