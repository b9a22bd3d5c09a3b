pub const KIBIBYTE: u64 = 0x400; // 1024
pub const MIBIBYTE: u64 = KIBIBYTE * KIBIBYTE;
pub const GIBIBYTE: u64 = MIBIBYTE * KIBIBYTE;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid size `{0}`: expected a number with an optional k/m/g suffix")]
    NoNumber(String),

    #[error("invalid size `{0}`: malformed number")]
    Malformed(String),

    #[error("size `{0}` does not fit in 64 bits")]
    Overflow(String),
}

/// Parses a byte count such as `512`, `64k`, `1.44M`, or `4G`.
///
/// The suffix is case-insensitive and uses binary multiples. Only the start of the string is
/// matched, so trailing text such as the `B` in `512MB` is ignored. Fractional results are
/// truncated toward zero.
pub fn parse_size(size: &str) -> Result<u64, Error> {
    let number_len = size.find(|c: char| !(c.is_ascii_digit() || c == '.')).unwrap_or(size.len());
    let (number, rest) = size.split_at(number_len);
    if number.is_empty() {
        return Err(Error::NoNumber(size.to_owned()));
    }

    let multiplier = match rest.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('k') => KIBIBYTE,
        Some('m') => MIBIBYTE,
        Some('g') => GIBIBYTE,
        _ => 1,
    };

    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    if fraction.contains('.') || (whole.is_empty() && fraction.is_empty()) {
        return Err(Error::Malformed(size.to_owned()));
    }

    let overflow = || Error::Overflow(size.to_owned());
    let multiplier = u128::from(multiplier);

    let whole_bytes = if whole.is_empty() {
        0
    } else {
        whole.parse::<u128>().map_err(|_| overflow())?.checked_mul(multiplier).ok_or_else(overflow)?
    };

    // floor((d + f) / 10) == floor(d / 10) for integer d and 0 <= f < 1, so the truncated carry
    // from less significant digits gives the exact result.
    let fraction_bytes =
        fraction.bytes().rev().fold(0u128, |carry, digit| (u128::from(digit - b'0') * multiplier + carry) / 10);

    let bytes = whole_bytes.checked_add(fraction_bytes).ok_or_else(overflow)?;
    log::trace!("parsed size `{size}` as {bytes} bytes");

    u64::try_from(bytes).map_err(|_| overflow())
}
