//! Number rendering for the result line.
//!
//! Integral values keep a trailing `.0`, large and tiny magnitudes switch to
//! exponent form with a signed exponent of at least two digits.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, fmtr: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_nan() {
            return fmtr.write_str("nan");
        }
        // Debug output is the shortest round-trip form and always carries a
        // fractional part or an exponent.
        let repr = format!("{:?}", self.0);
        match repr.find('e') {
            Some(idx) => fmtr.write_str(&signed_exponent(&repr[..idx], &repr[idx + 1..])),
            None => fmtr.write_str(&repr),
        }
    }
}

fn signed_exponent(mantissa: &str, exp: &str) -> String {
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exp.trim_start_matches('+')),
    };
    format!("{}e{}{:0>2}", mantissa, sign, digits)
}
