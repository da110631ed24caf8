//! HUD Components
//!
//! Stateless, procedurally drawn elements that float over the scene. They
//! are created once and reused for every instance they draw.
//!
//! # Available Components
//!
//! - [`FloatingText`] - rising, fading click rewards and purchase messages

pub mod floating_text;

pub use floating_text::FloatingText;
