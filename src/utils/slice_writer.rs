use core::fmt;

/// A [`fmt::Write`] that writes into a borrowed, fixed-size byte buffer.
///
/// Writing more than the buffer can hold fails with [`fmt::Error`], the
/// bytes that did fit stay in the buffer.
#[derive(Debug)]
pub struct SliceWriter<'a> {
    buffer: &'a mut [u8],
    len: usize,
}

impl<'a> SliceWriter<'a> {
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self { buffer, len: 0 }
    }

    /// The number of bytes written so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.len
    }
}

impl fmt::Write for SliceWriter<'_> {
    fn write_str(&mut self, string: &str) -> fmt::Result {
        let bytes = string.as_bytes();
        if bytes.len() > self.remaining() {
            return Err(fmt::Error);
        }

        self.buffer[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();

        Ok(())
    }
}
