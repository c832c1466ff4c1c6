//! Validated RGBA colors.
//!
//! A [`Color`] is only ever built through constructors that check their
//! input: integer channels outside `0..=255` are rejected, and alpha is
//! clamped into `0.0..=1.0`.

mod error;
mod rgba;

pub use error::{ColorError, ColorResult};
pub use rgba::Color;
