//! Data models for the Vida Carioca directory.
//!
//! These models match the frontend TypeScript interfaces exactly for seamless interoperability.

mod category;
mod chat;
mod content;
mod language;
mod spot;

pub use category::*;
pub use chat::*;
pub use content::*;
pub use language::*;
pub use spot::*;
