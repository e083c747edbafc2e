/// A sanitized energy consumption target in kWh.
///
/// Always finite and non-negative: anything that cannot be read as a
/// positive number collapses to zero instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Consumption(f64);

impl Consumption {
    /// No consumption target.
    pub const ZERO: Self = Self(0.0);

    /// Sanitizes a numeric value.
    #[must_use]
    pub fn from_kwh(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Self(value)
        } else {
            Self::ZERO
        }
    }

    /// Reads the leading number of a text field, e.g. `"1200 kWh"` → 1200.
    ///
    /// Leading whitespace is skipped. Empty, non-numeric, negative or
    /// non-finite input reads as zero.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim_start();
        let len = numeric_prefix_len(trimmed);
        trimmed[..len]
            .parse::<f64>()
            .map_or(Self::ZERO, Self::from_kwh)
    }

    /// Returns the value in kWh.
    #[must_use]
    pub fn kwh(&self) -> f64 {
        self.0
    }
}

impl From<&str> for Consumption {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl From<f64> for Consumption {
    fn from(value: f64) -> Self {
        Self::from_kwh(value)
    }
}

/// Length in bytes of the longest prefix shaped like a decimal float:
/// `[+-]digits[.digits][(e|E)[+-]digits]`.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i = 1;
    }
    let int_end = digits_from(i);
    let mut end = int_end;
    let mut mantissa_digits = int_end - i;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut j = end + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            end = exp_end;
        }
    }
    end
}
