/// Largest denominator tried when displaying a quantity as a fraction.
const MAX_DENOMINATOR: u32 = 16;
const TOLERANCE: f64 = 1e-6;

/// Display a quantity as a whole number, fraction or mixed fraction.
///
/// `0.5` → `"1/2"`, `1.5` → `"1 1/2"`, `2.0` → `"2"`. Values with no close
/// fraction fall back to at most two decimals.
pub fn format_quantity(quantity: f64) -> String {
    if !quantity.is_finite() || quantity < 0.0 {
        return format_decimal(quantity);
    }

    let mut whole = quantity.trunc() as u64;
    let fraction = quantity - whole as f64;

    if fraction < TOLERANCE {
        return whole.to_string();
    }

    for denominator in 2..=MAX_DENOMINATOR {
        let numerator = (fraction * denominator as f64).round() as u32;
        if (fraction - numerator as f64 / denominator as f64).abs() >= TOLERANCE {
            continue;
        }
        if numerator == denominator {
            whole += 1;
            return whole.to_string();
        }
        return if whole == 0 {
            format!("{}/{}", numerator, denominator)
        } else {
            format!("{} {}/{}", whole, numerator, denominator)
        };
    }

    format_decimal(quantity)
}

fn format_decimal(quantity: f64) -> String {
    let formatted = format!("{:.2}", quantity);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
