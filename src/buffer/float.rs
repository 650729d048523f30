use std::io::Write;

/// Decimal exponents outside `MIN_PLAIN_EXP..MAX_PLAIN_EXP` switch to
/// scientific notation.
const MIN_PLAIN_EXP: i32 = -4;
const MAX_PLAIN_EXP: i32 = 6;

/// Appends the shortest round-tripping rendering of `f`, `%g` style:
/// `3.14`, `100000`, `1e+06`, `1e-05`.
pub(super) fn append_float(out: &mut Vec<u8>, f: f64) {
    if f.is_nan() {
        out.extend_from_slice(b"NaN");
        return;
    }
    if f.is_infinite() {
        out.extend_from_slice(if f > 0.0 { b"+Inf" } else { b"-Inf" });
        return;
    }

    // `{:e}` yields the shortest digit string, e.g. `-1.2345e-7`.
    let sci = format!("{f:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let (negative, mantissa) = mantissa
        .strip_prefix('-')
        .map_or((false, mantissa), |m| (true, m));
    let digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();

    if negative {
        out.push(b'-');
    }

    if !(MIN_PLAIN_EXP..MAX_PLAIN_EXP).contains(&exp) {
        out.push(digits[0]);
        if digits.len() > 1 {
            out.push(b'.');
            out.extend_from_slice(&digits[1..]);
        }
        let sign = if exp < 0 { '-' } else { '+' };
        let _ = write!(out, "e{sign}{:02}", exp.unsigned_abs());
        return;
    }

    if exp < 0 {
        out.extend_from_slice(b"0.");
        out.extend(std::iter::repeat_n(b'0', exp.unsigned_abs() as usize - 1));
        out.extend_from_slice(&digits);
        return;
    }

    let int_len = exp.unsigned_abs() as usize + 1;
    if digits.len() <= int_len {
        out.extend_from_slice(&digits);
        out.extend(std::iter::repeat_n(b'0', int_len - digits.len()));
    } else {
        out.extend_from_slice(&digits[..int_len]);
        out.push(b'.');
        out.extend_from_slice(&digits[int_len..]);
    }
}
