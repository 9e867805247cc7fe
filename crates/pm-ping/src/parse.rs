use std::time::Duration;

/// Extract a round-trip time from `ping`'s textual output.
///
/// Two dialects are recognized: the iputils/BSD form with a space before the
/// unit (`time=12.3 ms`) and the Windows form without one (`time=12ms`).
/// A sub-millisecond reply is reported as `time<1ms`; we map it to half the
/// stated bound so the sample shows up as a small positive value in the
/// series instead of a false dip to zero. That is a deliberate
/// approximation.
///
/// Anything unrecognizable yields `None`.
pub fn parse_latency(output: &str) -> Option<Duration> {
    if let Some(rest) = split_after(output, "time<") {
        let bound = leading_number(rest)?;
        return duration_from_ms(bound / 2.0);
    }

    let rest = split_after(output, "time=")?;
    duration_from_ms(leading_number(rest)?)
}

fn split_after<'a>(haystack: &'a str, marker: &str) -> Option<&'a str> {
    haystack
        .find(marker)
        .map(|index| &haystack[index + marker.len()..])
}

fn leading_number(text: &str) -> Option<f64> {
    let digits: &str = text
        .split(|c: char| !c.is_ascii_digit() && c != '.')
        .next()?;

    digits.parse().ok()
}

fn duration_from_ms(ms: f64) -> Option<Duration> {
    if ms.is_finite() && ms >= 0.0 {
        Some(Duration::from_secs_f64(ms / 1_000.0))
    } else {
        None
    }
}
