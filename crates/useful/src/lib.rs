//! Bounds-validated access to text, calendar fields and colors.
//!
//! Re-exports the component crates and adds the pieces that need a runtime or
//! configuration: [`Toolkit`], [`schedule::delay`] and [`logging::init`].

pub mod logging;
pub mod schedule;
mod toolkit;

pub use toolkit::Toolkit;
pub use useful_color::{Color, ColorError};
pub use useful_core::config::{Settings, load_config};
pub use useful_core::error::{CoreError, CoreResult};
pub use useful_temporal::{
    Calendar, Components, Field, FieldAccessor, Instant, TemporalError, TemporalResult, Unit,
    ZonedCalendar,
};
pub use useful_text::{NumberFormat, Repeat, TextExt, TextExtMut, lorem_ipsum, repeat};

pub use useful_color as color;
pub use useful_temporal as temporal;
pub use useful_text as text;
