// Feedback widget: form state and the request it sends

pub mod client;
pub mod form;

pub use client::{FeedbackClient, FeedbackSubmission};
pub use form::{FeedbackForm, FormStatus};
