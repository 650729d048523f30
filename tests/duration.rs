use chrono::TimeDelta;
use conslog::Buffer;

fn render(d: TimeDelta) -> String {
    let mut b = Buffer::new();
    b.append_duration(d);
    b.as_str().into_owned()
}

fn hms(h: i64, m: i64, s: i64, ms: i64, us: i64, ns: i64) -> TimeDelta {
    TimeDelta::hours(h)
        + TimeDelta::minutes(m)
        + TimeDelta::seconds(s)
        + TimeDelta::milliseconds(ms)
        + TimeDelta::microseconds(us)
        + TimeDelta::nanoseconds(ns)
}

#[test]
fn below_one_day_matches_native_text() {
    let cases = [
        (hms(2, 3, 4, 5, 6, 7), "2h3m4.005006007s"),
        (hms(0, 3, 4, 5, 6, 7), "3m4.005006007s"),
        (hms(0, 0, 4, 5, 6, 7), "4.005006007s"),
        (hms(0, 0, 0, 5, 6, 7), "5.006007ms"),
        (hms(0, 0, 0, 0, 6, 7), "6.007µs"),
        (TimeDelta::nanoseconds(7), "7ns"),
        (TimeDelta::zero(), "0s"),
        (hms(2, 0, 0, 0, 0, 7), "2h0m0.000000007s"),
        (hms(-2, 0, 0, 0, 0, 7), "-1h59m59.999999993s"),
    ];
    for (d, expected) in cases {
        assert_eq!(render(d), expected);
    }
}

#[test]
fn whole_units() {
    assert_eq!(render(TimeDelta::seconds(1)), "1s");
    assert_eq!(render(TimeDelta::minutes(1)), "1m0s");
    assert_eq!(render(TimeDelta::hours(1)), "1h0m0s");
    assert_eq!(render(TimeDelta::milliseconds(10)), "10ms");
    assert_eq!(render(TimeDelta::seconds(532)), "8m52s");
}

#[test]
fn negative_sub_second() {
    assert_eq!(render(TimeDelta::milliseconds(-1)), "-1ms");
    assert_eq!(render(TimeDelta::nanoseconds(-7)), "-7ns");
}

#[test]
fn past_one_day_uses_day_form() {
    assert_eq!(render(TimeDelta::hours(49) + TimeDelta::seconds(1)), "2d1h0m1s");
    assert_eq!(
        render(TimeDelta::days(3) + TimeDelta::milliseconds(1500)),
        "3d0h0m1s"
    );
    assert_eq!(
        render(-(TimeDelta::hours(49) + TimeDelta::seconds(1))),
        "-2d1h0m1s"
    );
}

#[test]
fn exactly_one_day_stays_in_hours() {
    assert_eq!(render(TimeDelta::hours(24)), "24h0m0s");
}
