use core::fmt::{self, Write as _};

use crate::time::{Duration, DurationError};
use crate::utils::{self, SliceWriter};

/// The length of `HH:MM:SS`.
pub const SHORT_LEN: usize = 8;

// `-HH:MM:SS:MMMM` after the days
const LONG_CLOCK_LEN: usize = 14;

/// Renders a [`Duration`] as `HH:MM:SS`, dropping the days and milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShortDuration(Duration);

impl fmt::Display for ShortDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.0.hours(),
            self.0.minutes(),
            self.0.seconds()
        )
    }
}

impl From<Duration> for ShortDuration {
    fn from(value: Duration) -> Self {
        Self(value)
    }
}

/// Writes `text` followed by a NUL byte into `buffer`, or nothing at all if
/// it does not fit.
fn write_terminated(
    buffer: &mut [u8],
    len: usize,
    text: impl fmt::Display,
) -> Result<usize, DurationError> {
    let required = len + 1;
    let too_small = DurationError::BufferTooSmall {
        required,
        capacity: buffer.len(),
    };

    if buffer.len() < required {
        return Err(too_small);
    }

    let mut writer = SliceWriter::new(&mut buffer[..len]);
    write!(writer, "{}", text).map_err(|_| too_small)?;
    debug_assert_eq!(writer.len(), len);

    buffer[len] = 0;
    Ok(len)
}

impl Duration {
    /// The exact length of the long form `D-HH:MM:SS:MMMM`, without a
    /// terminator.
    #[must_use]
    pub const fn long_len(&self) -> usize {
        utils::decimal_digits(self.days()) + LONG_CLOCK_LEN
    }

    /// Writes `D-HH:MM:SS:MMMM` and a trailing NUL into `buffer` and returns
    /// the length of the text.
    ///
    /// The buffer must hold at least [`Duration::long_len`] + 1 bytes,
    /// otherwise [`DurationError::BufferTooSmall`] is returned and the buffer
    /// is not touched.
    pub fn write_long(&self, buffer: &mut [u8]) -> Result<usize, DurationError> {
        write_terminated(buffer, self.long_len(), self)
    }

    /// Writes `HH:MM:SS` and a trailing NUL into `buffer`, which must hold at
    /// least [`SHORT_LEN`] + 1 bytes.
    pub fn write_short(&self, buffer: &mut [u8]) -> Result<usize, DurationError> {
        write_terminated(buffer, SHORT_LEN, self.short())
    }

    #[must_use]
    pub fn short(&self) -> ShortDuration {
        ShortDuration::from(*self)
    }
}
