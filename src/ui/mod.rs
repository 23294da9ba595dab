// UI module organization
pub mod layout;
pub mod components;
pub mod search;
pub mod ticker;
pub mod feedback;

// Re-export the main UI function
pub use layout::render_ui;
