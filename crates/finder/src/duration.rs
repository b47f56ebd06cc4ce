//! ISO 8601 duration parsing for `contentDetails.duration` values such as `PT12M3S`.

/// Designators allowed before `T`, largest first. Years and months have no fixed
/// length in seconds.
const DATE_UNITS: &[(char, Option<u64>)] = &[
    ('Y', None),
    ('M', None),
    ('W', Some(604_800)),
    ('D', Some(86_400)),
];

/// Designators allowed after `T`, largest first.
const TIME_UNITS: &[(char, Option<u64>)] = &[('H', Some(3_600)), ('M', Some(60)), ('S', Some(1))];

/// Digits of a decimal fraction that are kept; finer digits cannot change whole seconds.
const FRACTION_DIGITS: usize = 9;

/// Parse an ISO 8601 duration into whole seconds.
///
/// Returns `None` for anything that is not a non-negative duration expressible in
/// seconds: empty input, missing `P`, out-of-order or repeated designators,
/// calendar units (years, months), and overflow. Only the last component may carry
/// a fraction (`PT1.5M` is 90 seconds); any sub-second remainder is truncated.
pub fn parse_iso8601_duration(text: &str) -> Option<u64> {
    let rest = text.trim().strip_prefix('P')?;
    let (date, time) = match rest.split_once('T') {
        Some((_, "")) => return None,
        Some((date, time)) => (date, Some(time)),
        None => (rest, None),
    };

    let (date_seconds, date_parts) = sum_components(date, DATE_UNITS, time.is_none())?;
    let (time_seconds, time_parts) = match time {
        Some(time) => sum_components(time, TIME_UNITS, true)?,
        None => (0, 0),
    };

    if date_parts + time_parts == 0 {
        return None;
    }
    date_seconds.checked_add(time_seconds)
}

/// Sum `<number><designator>` pairs, returning the total and how many pairs were read.
/// With `fraction_allowed`, the final pair may have a decimal fraction.
fn sum_components(
    part: &str,
    units: &[(char, Option<u64>)],
    fraction_allowed: bool,
) -> Option<(u64, usize)> {
    let mut total = 0u64;
    let mut parts = 0;
    let mut next_unit = 0;
    let mut start = 0;
    let mut after_fraction = false;

    for (i, c) in part.char_indices() {
        if c.is_ascii_digit() || c == '.' || c == ',' {
            continue;
        }
        // A fractional component must be the last one
        if after_fraction {
            return None;
        }
        let offset = units[next_unit..].iter().position(|(d, _)| *d == c)?;
        let (_, seconds) = units[next_unit + offset];
        next_unit += offset + 1;

        let (whole, fraction) = split_number(&part[start..i])?;
        let seconds = seconds?;
        total = total.checked_add(whole.checked_mul(seconds)?)?;
        if let Some(fraction) = fraction {
            if !fraction_allowed {
                return None;
            }
            total = total.checked_add(fraction_seconds(fraction, seconds)?)?;
            after_fraction = true;
        }
        parts += 1;
        start = i + c.len_utf8();
    }

    // Digits with no designator after them
    if start != part.len() {
        return None;
    }
    Some((total, parts))
}

/// Split `12` or `12.5` into the whole part and the fraction digits, if any.
fn split_number(value: &str) -> Option<(u64, Option<&str>)> {
    let (whole, fraction) = match value.find(['.', ',']) {
        Some(i) => (&value[..i], Some(&value[i + 1..])),
        None => (value, None),
    };
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Some(fraction) = fraction {
        if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }
    Some((whole.parse().ok()?, fraction))
}

/// Whole seconds in `0.<digits>` of a unit lasting `seconds`.
fn fraction_seconds(digits: &str, seconds: u64) -> Option<u64> {
    let digits = &digits[..digits.len().min(FRACTION_DIGITS)];
    let numerator: u64 = digits.parse().ok()?;
    let denominator = 10u64.checked_pow(u32::try_from(digits.len()).ok()?)?;
    Some(numerator.checked_mul(seconds)? / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_typical_video_lengths() {
        assert_eq!(parse_iso8601_duration("PT12M3S"), Some(723));
        assert_eq!(parse_iso8601_duration("PT2M"), Some(120));
        assert_eq!(parse_iso8601_duration("PT0M30S"), Some(30));
        assert_eq!(parse_iso8601_duration("PT1H2M"), Some(3_720));
        assert_eq!(parse_iso8601_duration("PT58S"), Some(58));
    }

    #[test]
    fn parses_day_and_week_components() {
        assert_eq!(parse_iso8601_duration("P1DT2H3M4S"), Some(93_784));
        assert_eq!(parse_iso8601_duration("P2W"), Some(1_209_600));
        assert_eq!(parse_iso8601_duration("P0D"), Some(0));
    }

    #[test]
    fn truncates_fractional_seconds() {
        assert_eq!(parse_iso8601_duration("PT1M5.9S"), Some(65));
        assert_eq!(parse_iso8601_duration("PT5,25S"), Some(5));
        assert_eq!(parse_iso8601_duration("PT0.9999999999999S"), Some(0));
    }

    #[test]
    fn fraction_on_last_component_scales_by_its_unit() {
        assert_eq!(parse_iso8601_duration("PT1.5M"), Some(90));
        assert_eq!(parse_iso8601_duration("PT0.5H"), Some(1_800));
        assert_eq!(parse_iso8601_duration("PT1H1.25M"), Some(3_675));
        assert_eq!(parse_iso8601_duration("P1.5D"), Some(129_600));
        assert_eq!(parse_iso8601_duration("PT2,5M"), Some(150));
    }

    #[test]
    fn fraction_before_another_component_is_rejected() {
        assert_eq!(parse_iso8601_duration("PT1.5M30S"), None);
        assert_eq!(parse_iso8601_duration("PT1.5H2.5M"), None);
        assert_eq!(parse_iso8601_duration("P1.5DT1H"), None);
    }

    #[test]
    fn zero_duration_is_zero_not_absent() {
        assert_eq!(parse_iso8601_duration("PT0S"), Some(0));
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in [
            "", "P", "PT", "12M", "PT12", "PT3S2M", "PT1M1M", "PTxS", "-PT1M", "PT.5S",
            "P1H", "PT1D", "PT5.S",
        ] {
            assert_eq!(parse_iso8601_duration(bad), None, "{bad:?} should not parse");
        }
    }

    #[test]
    fn rejects_calendar_units() {
        assert_eq!(parse_iso8601_duration("P1Y"), None);
        assert_eq!(parse_iso8601_duration("P1M2DT3H"), None);
    }

    #[test]
    fn rejects_overflow() {
        assert_eq!(parse_iso8601_duration("PT99999999999999999999S"), None);
        assert_eq!(parse_iso8601_duration("P9999999999999999W"), None);
    }
}
