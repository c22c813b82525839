//! Decimal magnitude buckets

pub const HUNDRED: u64 = 100;
pub const THOUSAND: u64 = 1_000;
pub const MILLION: u64 = 1_000_000;
pub const BILLION: u64 = 1_000_000_000;
pub const TRILLION: u64 = 1_000_000_000_000;

/// Number of decimal digits in `n` (zero has one digit)
pub fn digit_count(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}

/// Scale factor for a value, bucketed by its digit count.
///
/// 1-3 digits → 1, 4-6 → thousand, 7-8 → million, 9-10 → billion,
/// 11-12 → trillion. Anything longer is past trillion and has no factor.
pub fn scale_factor_for(n: u64) -> Option<u64> {
    match digit_count(n) {
        1..=3 => Some(1),
        4..=6 => Some(THOUSAND),
        7..=8 => Some(MILLION),
        9..=10 => Some(BILLION),
        11..=12 => Some(TRILLION),
        _ => None,
    }
}
