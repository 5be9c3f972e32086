//! ## Number display
//!
//! Results that are whole within `1e-10` print without decimals. Everything
//! else prints with six significant digits in general notation, switching
//! to an exponent for very large or very small magnitudes.

const SIGNIFICANT: usize = 6;

/// Render a computed value the way the calculator displays results.
pub fn number(val: f64) -> String {
    if (val - val.round()).abs() < 1e-10 {
        format!("{:.0}", val)
    } else {
        general(val)
    }
}

/// Six significant digits, general notation.
pub fn general(val: f64) -> String {
    if val.is_nan() {
        return "nan".to_string();
    }
    if val.is_infinite() {
        let inf = if val > 0.0 { "inf" } else { "-inf" };
        return inf.to_string();
    }
    if val == 0.0 {
        let zero = if val.is_sign_negative() { "-0" } else { "0" };
        return zero.to_string();
    }
    let sci = format!("{:.*e}", SIGNIFICANT - 1, val);
    let (mantissa, exp) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci.clone(),
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if exp < -4 || exp >= SIGNIFICANT as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (SIGNIFICANT as i32 - 1 - exp) as usize;
        trim_zeros(&format!("{:.*}", decimals, val)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers() {
        assert_eq!(number(14.0), "14");
        assert_eq!(number(-3.0), "-3");
        assert_eq!(number(1e-11), "0");
        assert_eq!(number(2.0 + 1e-12), "2");
        assert_eq!(number(12345678.0), "12345678");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(number(2.5), "2.5");
        assert_eq!(number(1.0 / 3.0), "0.333333");
        assert_eq!(number(-0.1), "-0.1");
        assert_eq!(number(123456.7), "123457");
    }

    #[test]
    fn test_general() {
        assert_eq!(general(std::f64::consts::PI), "3.14159");
        assert_eq!(general(std::f64::consts::E), "2.71828");
        assert_eq!(general(10.0), "10");
        assert_eq!(general(100000.0), "100000");
        assert_eq!(general(0.0001), "0.0001");
        assert_eq!(general(0.0), "0");
    }

    #[test]
    fn test_general_exponent() {
        assert_eq!(general(1234567.0), "1.23457e+06");
        assert_eq!(general(999999.5), "1e+06");
        assert_eq!(general(0.00001234), "1.234e-05");
        assert_eq!(general(-2.5e-7), "-2.5e-07");
        assert_eq!(general(6.02e23), "6.02e+23");
        assert_eq!(general(1e100), "1e+100");
    }
}
