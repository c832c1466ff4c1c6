use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorError {
    #[error("{channel} channel {value} is outside 0..=255")]
    ChannelOutOfRange { channel: &'static str, value: i64 },
}

pub type ColorResult<T> = std::result::Result<T, ColorError>;
