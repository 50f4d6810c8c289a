//! Contact channels offered to shoppers.

pub mod whatsapp;

pub use whatsapp::{greeting_link, inquiry_link, inquiry_message};
