use std::fmt;

use rand::Rng;

use crate::error::{ColorError, ColorResult};

/// Largest 8-bit channel value; channels are stored divided by it.
const CHANNEL_MAX: u8 = u8::MAX;
const CHANNEL_SCALE: f64 = 255.0;

/// An RGBA color with every component in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::opaque(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::opaque(1.0, 1.0, 1.0);

    const fn opaque(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// ## Summary
    /// Builds a color from 8-bit channels and an alpha value.
    ///
    /// Alpha is clamped into `0.0..=1.0`; NaN is treated as fully opaque.
    ///
    /// ## Errors
    /// Returns `ColorError::ChannelOutOfRange` for the first of `red`, `green`,
    /// `blue` outside `0..=255`.
    pub fn try_from_channels(red: i64, green: i64, blue: i64, alpha: f64) -> ColorResult<Self> {
        let red = normalize("red", red)?;
        let green = normalize("green", green)?;
        let blue = normalize("blue", blue)?;

        Ok(Self {
            red,
            green,
            blue,
            alpha: clamp_alpha(alpha),
        })
    }

    /// Like [`Color::try_from_channels`], returning `None` on a bad channel.
    #[must_use]
    pub fn from_channels(red: i64, green: i64, blue: i64, alpha: f64) -> Option<Self> {
        Self::try_from_channels(red, green, blue, alpha)
            .inspect_err(|e| tracing::trace!(error = %e, "Rejected color channels"))
            .ok()
    }

    /// Opaque color from 8-bit channels.
    #[must_use]
    pub fn rgb(red: i64, green: i64, blue: i64) -> Option<Self> {
        Self::from_channels(red, green, blue, 1.0)
    }

    /// Builds a color from a packed `0xRRGGBB` value; bits above 23 are ignored.
    ///
    /// `Color::from_hex(0xDECEB5, 1.0)` equals `Color::from_channels(0xDE, 0xCE, 0xB5, 1.0)`.
    #[must_use]
    pub fn from_hex(hex: i64, alpha: f64) -> Option<Self> {
        let red = (hex >> 16) & 0xFF;
        let green = (hex >> 8) & 0xFF;
        let blue = hex & 0xFF;
        Self::from_channels(red, green, blue, alpha)
    }

    /// Opaque color from a packed `0xRRGGBB` value.
    #[must_use]
    pub fn hex(hex: i64) -> Option<Self> {
        Self::from_hex(hex, 1.0)
    }

    /// Opaque color with independently uniform channels in `0..=255`.
    #[must_use]
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    #[must_use]
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut channel = || f64::from(rng.gen_range(0..=CHANNEL_MAX)) / CHANNEL_SCALE;
        Self::opaque(channel(), channel(), channel())
    }

    #[must_use]
    pub const fn red(&self) -> f64 {
        self.red
    }

    #[must_use]
    pub const fn green(&self) -> f64 {
        self.green
    }

    #[must_use]
    pub const fn blue(&self) -> f64 {
        self.blue
    }

    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Same color with a different (clamped) alpha.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: clamp_alpha(alpha),
            ..self
        }
    }

    /// Channels back in the 8-bit domain.
    #[must_use]
    pub fn to_rgb8(&self) -> [u8; 3] {
        [to_u8(self.red), to_u8(self.green), to_u8(self.blue)]
    }

    /// Channels packed as `0xRRGGBB`.
    #[must_use]
    pub fn to_hex(&self) -> u32 {
        let [red, green, blue] = self.to_rgb8();
        (u32::from(red) << 16) | (u32::from(green) << 8) | u32::from(blue)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.to_hex())?;
        if self.alpha < 1.0 {
            write!(f, " ({:.0}%)", self.alpha * 100.0)?;
        }
        Ok(())
    }
}

fn normalize(channel: &'static str, value: i64) -> ColorResult<f64> {
    u8::try_from(value)
        .map(|byte| f64::from(byte) / CHANNEL_SCALE)
        .map_err(|_e| ColorError::ChannelOutOfRange { channel, value })
}

fn clamp_alpha(alpha: f64) -> f64 {
    if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped to 0.0..=255.0 before the cast"
)]
fn to_u8(component: f64) -> u8 {
    (component * CHANNEL_SCALE).round().clamp(0.0, CHANNEL_SCALE) as u8
}
