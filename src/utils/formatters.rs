/// Formats a quantity (volume, pool size, balance) into a compact
/// human-readable string with K/M suffixes.
///
/// Bands are picked by the raw magnitude, not the post-division value:
/// - `|num| >= 10,000,000`: millions, two decimals, `M` suffix
/// - `|num| >= 10,000`: thousands, two decimals, `K` suffix
/// - below that: two decimals, no suffix
///
/// so `9_999_999.0` renders as `"10000.00K"`, staying in the K band.
/// Negative values band by absolute value and keep their sign. Rounding is
/// Rust's default fixed-precision formatting: round-to-nearest of the exact
/// binary value, ties to even. Non-finite input passes through as the
/// literal `NaN`/`inf` rendering with no suffix.
pub fn format_number(num: f64) -> String {
    if !num.is_finite() {
        return format!("{:.2}", num);
    }
    let magnitude = num.abs();
    if magnitude >= 10_000_000.0 {
        format!("{:.2}M", num / 1_000_000.0)
    } else if magnitude >= 10_000.0 {
        format!("{:.2}K", num / 1_000.0)
    } else {
        format!("{:.2}", num)
    }
}
