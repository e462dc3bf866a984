use crate::core::data::region::Region;

/// Share of the horizontal span shown as the scale measurement.
const SCALE_SPAN_FRACTION: f64 = 0.2;

/// Annotation describing the zoom level of `region`, e.g. `Scale: 6.00e-01`.
#[must_use]
pub fn scale_label(region: &Region) -> String {
    format!(
        "Scale: {}",
        format_scientific(region.width() * SCALE_SPAN_FRACTION)
    )
}

/// Two-decimal scientific notation with a signed, zero-padded exponent of at
/// least two digits (`6.00e-01`, `1.23e+05`).
#[must_use]
pub fn format_scientific(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }

    let formatted = format!("{:.2e}", value);

    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => {
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
            }
            Err(_) => formatted,
        },
        None => formatted,
    }
}
