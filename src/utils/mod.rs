mod macros;
mod slice_writer;

pub use slice_writer::*;

/// Adds `to_add` to `base` in a field that wraps around at `modulus`.
///
/// Returns the new field value and how often the field wrapped, which is the
/// amount that has to be carried into the next field.
#[must_use]
pub const fn carrying_add(base: u64, to_add: u64, modulus: u64) -> (u64, u64) {
    let total = base + to_add;
    (total % modulus, total / modulus)
}

/// The number of decimal digits needed to print `value`.
#[must_use]
pub const fn decimal_digits(value: u32) -> usize {
    let mut digits = 1;
    let mut rest = value / 10;
    while rest > 0 {
        digits += 1;
        rest /= 10;
    }

    digits
}

pub trait StrExt {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N];
}

impl StrExt for str {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N] {
        let mut split = self.splitn(N, pat);
        [(); N].map(|_| split.next())
    }
}
