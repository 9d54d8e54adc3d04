//! Numbers printed the way a browser prints them, so `2.0` shows as `2`.

/// Magnitudes at or above this are written with an exponent.
const EXPONENT_ABOVE: f64 = 1e21;
/// Magnitudes below this are written with an exponent.
const EXPONENT_BELOW: f64 = 1e-6;

pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // Covers -0 as well.
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();

    if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }

    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_have_no_fraction() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(20.0), "20");
        assert_eq!(format_number(-1.0), "-1");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn fractions_are_kept() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1), "0.1");
    }

    #[test]
    fn extremes_use_exponents() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e22), "1.5e+22");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(123456789012345680000.0), "123456789012345680000");
    }
}
