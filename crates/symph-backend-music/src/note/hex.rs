//! Hexadecimal readings of signature text.
//!
//! Signatures are usually base58, so most characters are not hex digits.
//! Every reading here has a defined fallback of 0 instead of failing.

/// Value of a single character read as a hex digit, or 0 if it is not one.
///
/// # Examples
/// ```
/// use symph_backend_music::note::hex_digit_value;
///
/// assert_eq!(hex_digit_value('a'), 10);
/// assert_eq!(hex_digit_value('F'), 15);
/// assert_eq!(hex_digit_value('z'), 0);
/// ```
pub fn hex_digit_value(c: char) -> u32 {
    c.to_digit(16).unwrap_or(0)
}

/// Value of the longest leading run of hex digits, or 0 if there is none.
///
/// `"1fz9"` reads as `0x1f`; `"zz"` reads as 0. Runs longer than 16 digits
/// saturate at `u64::MAX`.
///
/// # Examples
/// ```
/// use symph_backend_music::note::hex_prefix_value;
///
/// assert_eq!(hex_prefix_value("0000ffff"), 0xffff);
/// assert_eq!(hex_prefix_value("1fz9"), 0x1f);
/// assert_eq!(hex_prefix_value("zz"), 0);
/// ```
pub fn hex_prefix_value(text: &str) -> u64 {
    text.chars()
        .map_while(|c| c.to_digit(16))
        .fold(0u64, |acc, d| acc.saturating_mul(16).saturating_add(d as u64))
}
