// App module structure

pub mod types;
pub mod core;
pub mod input;

// Re-export the main App struct and key types
pub use core::App;
pub use types::Focus;
