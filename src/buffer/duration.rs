use chrono::TimeDelta;
use std::io::Write;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Appends a compact human-readable rendering of `d`.
///
/// Up to one day the output follows the familiar `72h3m0.5s` shape: sub-second
/// spans pick the largest of `ns`, `µs`, `ms`, and fractions drop trailing
/// zeros. Past one day it switches to `<d>d<h>h<m>m<s>s` without a fraction.
pub(super) fn append_duration(out: &mut Vec<u8>, d: TimeDelta) {
    let magnitude = d.abs();
    let secs = magnitude.num_seconds().unsigned_abs();
    let nanos = u64::from(magnitude.subsec_nanos().unsigned_abs());

    if secs == 0 && nanos == 0 {
        out.extend_from_slice(b"0s");
        return;
    }
    if d < TimeDelta::zero() {
        out.push(b'-');
    }

    if secs > SECS_PER_DAY || (secs == SECS_PER_DAY && nanos > 0) {
        let days = secs / SECS_PER_DAY;
        let hours = secs % SECS_PER_DAY / SECS_PER_HOUR;
        let minutes = secs % SECS_PER_HOUR / SECS_PER_MINUTE;
        let seconds = secs % SECS_PER_MINUTE;
        let _ = write!(out, "{days}d{hours}h{minutes}m{seconds}s");
        return;
    }

    if secs == 0 {
        let (unit, digits): (&[u8], u32) = match nanos {
            0..1_000 => (b"ns", 0),
            1_000..1_000_000 => ("µs".as_bytes(), 3),
            _ => (b"ms", 6),
        };
        let scale = 10u64.pow(digits);
        let _ = write!(out, "{}", nanos / scale);
        append_frac(out, nanos % scale, digits);
        out.extend_from_slice(unit);
        return;
    }

    let hours = secs / SECS_PER_HOUR;
    let minutes = secs % SECS_PER_HOUR / SECS_PER_MINUTE;
    if hours > 0 {
        let _ = write!(out, "{hours}h");
    }
    if hours > 0 || minutes > 0 {
        let _ = write!(out, "{minutes}m");
    }
    let _ = write!(out, "{}", secs % SECS_PER_MINUTE);
    append_frac(out, nanos, 9);
    out.push(b's');
}

/// Writes `.ddd` for a fraction of `digits` decimal places, trailing zeros
/// removed. Writes nothing for a zero fraction.
fn append_frac(out: &mut Vec<u8>, mut frac: u64, mut digits: u32) {
    while digits > 0 && frac % 10 == 0 {
        frac /= 10;
        digits -= 1;
    }
    if digits == 0 {
        return;
    }
    out.push(b'.');
    let start = out.len();
    for _ in 0..digits {
        out.push(b'0' + (frac % 10) as u8);
        frac /= 10;
    }
    out[start..].reverse();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(d: TimeDelta) -> String {
        let mut out = Vec::new();
        append_duration(&mut out, d);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn fraction_trims_trailing_zeros() {
        let mut out = Vec::new();
        append_frac(&mut out, 500_000_000, 9);
        assert_eq!(out, b".5");
    }

    #[test]
    fn zero_fraction_writes_nothing() {
        let mut out = Vec::new();
        append_frac(&mut out, 0, 9);
        assert!(out.is_empty());
    }

    #[test]
    fn exactly_one_day_keeps_hour_form() {
        assert_eq!(render(TimeDelta::hours(24)), "24h0m0s");
        assert_eq!(
            render(TimeDelta::hours(24) + TimeDelta::nanoseconds(1)),
            "1d0h0m0s"
        );
    }
}
