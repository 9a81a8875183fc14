/// Render a calculator value for display.
///
/// Without a precision the shortest round-trip form is used. With one, the
/// value is rounded to that many fractional digits and trailing zeros are
/// dropped.
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    let formatted = match precision {
        Some(digits) => {
            let fixed = format!("{:.*}", digits, value);
            if fixed.contains('.') {
                fixed
                    .trim_end_matches('0')
                    .trim_end_matches('.')
                    .to_string()
            } else {
                fixed
            }
        }
        None => format!("{}", value),
    };

    // Negative zero and values rounded to zero print without a sign
    if formatted == "-0" {
        "0".to_string()
    } else {
        formatted
    }
}
