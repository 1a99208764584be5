pub mod errors;
pub mod models;
pub mod registry;
pub mod services;
pub mod traits;
pub mod variants;
