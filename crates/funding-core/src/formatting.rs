/// Format a floating-point number with thousands separators and a fixed number
/// of decimal places.
///
/// # Examples
///
/// ```
/// use funding_core::formatting::format_number;
///
/// assert_eq!(format_number(1234.5,  1), "1,234.5");
/// assert_eq!(format_number(1234567.0, 0), "1,234,567");
/// assert_eq!(format_number(0.0, 2), "0.00");
/// assert_eq!(format_number(-9876.5, 1), "-9,876.5");
/// ```
pub fn format_number(value: f64, decimals: u32) -> String {
    let negative = value < 0.0;
    let abs_value = value.abs();

    // Add a tiny epsilon (half ULP at the target precision) before rounding
    // to avoid IEEE 754 binary-representation issues at exact midpoints.
    let factor = 10_f64.powi(decimals as i32);
    let epsilon = f64::EPSILON * abs_value * factor;
    let rounded = ((abs_value * factor) + epsilon).round() / factor;

    let integer_part = rounded.trunc() as u64;
    let frac_part = rounded - rounded.trunc();

    let int_str = integer_part.to_string();
    let grouped = group_thousands(&int_str);

    let result = if decimals == 0 {
        grouped
    } else {
        let frac_str = format!("{:.prec$}", frac_part, prec = decimals as usize);
        // `frac_str` starts with "0.", e.g. "0.50". Strip the leading "0".
        let decimal_digits = &frac_str[1..];
        format!("{}{}", grouped, decimal_digits)
    };

    if negative {
        format!("-{}", result)
    } else {
        result
    }
}

/// Format an amount already expressed in crores, e.g. `"1,234 Cr"`.
///
/// # Examples
///
/// ```
/// use funding_core::formatting::format_crores;
///
/// assert_eq!(format_crores(1234.4, 0), "1,234 Cr");
/// assert_eq!(format_crores(8.25, 2),   "8.25 Cr");
/// assert_eq!(format_crores(0.0, 0),    "0 Cr");
/// ```
pub fn format_crores(amount: f64, decimals: u32) -> String {
    format!("{} Cr", format_number(amount, decimals))
}

/// Format an optional crore amount, rendering `None` as `"N/A"`.
pub fn format_optional_crores(amount: Option<f64>, decimals: u32) -> String {
    match amount {
        Some(v) => format_crores(v, decimals),
        None => "N/A".to_string(),
    }
}

/// Round `value` to `places` decimals.
///
/// Rounds the exact binary value of `value`, so `10.395` (stored just below
/// the midpoint) goes down. Exact midpoints resolve to the even neighbour.
///
/// # Examples
///
/// ```
/// use funding_core::formatting::round_to;
///
/// assert_eq!(round_to(1.018512, 2), 1.02);
/// assert_eq!(round_to(4.125, 2), 4.12);
/// assert_eq!(round_to(10.395, 2), 10.39);
/// assert_eq!(round_to(4.135, 0), 4.0);
/// ```
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // Fixed-precision formatting is correctly rounded on the exact expansion;
    // scaling by 10^places first would add a second rounding step.
    format!("{:.*}", places as usize, value)
        .parse()
        .unwrap_or(value)
}

/// Calculate `(part / whole) * 100`, rounded to `decimal_places`.
///
/// Returns `0.0` if `whole` is zero to avoid division by zero.
///
/// # Examples
///
/// ```
/// use funding_core::formatting::percentage;
///
/// assert!((percentage(50.0, 200.0, 1) - 25.0).abs() < 1e-9);
/// assert_eq!(percentage(0.0, 0.0, 2), 0.0);
/// ```
pub fn percentage(part: f64, whole: f64, decimal_places: u32) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    let raw = (part / whole) * 100.0;
    let factor = 10_f64.powi(decimal_places as i32);
    (raw * factor).round() / factor
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let remainder = chars.len() % 3;
    for (i, &c) in chars.iter().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ──────────────────────────────────────────────────────────────────────
