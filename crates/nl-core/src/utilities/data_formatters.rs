//! Data formatting helpers.

/// Left-pad `n` with zeros to at least `width` digits.
///
/// ```
/// use nl_core::utilities::data_formatters::zero_pad;
///
/// assert_eq!(zero_pad(5, 2), "05");
/// assert_eq!(zero_pad(2024, 2), "2024");
/// ```
pub fn zero_pad(n: u32, width: usize) -> String {
    format!("{n:0width$}")
}

/// Two-digit zero padding, the form used in `"MMDD"` and `"yyyyMM"` keys.
pub fn pad2(n: u32) -> String {
    zero_pad(n, 2)
}
