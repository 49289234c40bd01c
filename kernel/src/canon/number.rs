//! Number rendering.
//!
//! Numbers arrive as their original literal text (`arbitrary_precision`).
//! Integer literals are kept verbatim, whatever their magnitude. Every other
//! literal is read as an `f64` and written in shortest round-trip form:
//!
//! - fixed notation when the decimal point position `p` (value =
//!   `0.d1d2… × 10^p`) satisfies `-4 < p <= 16`, with a trailing `.0` on
//!   integral values;
//! - scientific notation otherwise, as `d[.ddd]e±XX` with at least two
//!   exponent digits;
//! - `Infinity` / `-Infinity` for literals that overflow `f64`.

use std::borrow::Cow;
use std::fmt::Write;

/// Largest decimal point position still written in fixed notation.
const FIXED_MAX_POINT: i32 = 16;
/// Smallest decimal point position still written in fixed notation.
const FIXED_MIN_POINT: i32 = -3;

/// Render a JSON number literal.
#[must_use]
pub fn render_number(literal: &str) -> Cow<'_, str> {
    if !literal.contains(['.', 'e', 'E']) {
        return if literal == "-0" {
            Cow::Borrowed("0")
        } else {
            Cow::Borrowed(literal)
        };
    }
    match literal.parse::<f64>() {
        Ok(x) => Cow::Owned(render_float(x)),
        // Parser-validated literals always parse; keep the text otherwise.
        Err(_) => Cow::Borrowed(literal),
    }
}

fn render_float(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.2345e3`.
    let sci = format!("{:e}", x.abs());
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return sci;
    };
    let digits = mantissa.replace('.', "");
    let point = exponent + 1;

    let mut out = String::with_capacity(digits.len() + 8);
    if x.is_sign_negative() {
        out.push('-');
    }

    if (FIXED_MIN_POINT..=FIXED_MAX_POINT).contains(&point) {
        let len = digits.len();
        let point_idx = point.unsigned_abs() as usize;
        if point <= 0 {
            out.push_str("0.");
            out.extend(std::iter::repeat('0').take(point_idx));
            out.push_str(&digits);
        } else if point_idx >= len {
            out.push_str(&digits);
            out.extend(std::iter::repeat('0').take(point_idx - len));
            out.push_str(".0");
        } else {
            out.push_str(&digits[..point_idx]);
            out.push('.');
            out.push_str(&digits[point_idx..]);
        }
    } else {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        let shown = point - 1;
        let sign = if shown < 0 { '-' } else { '+' };
        let _ = write!(out, "e{sign}{:02}", shown.unsigned_abs());
    }
    out
}
