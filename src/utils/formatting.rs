//! Formatting utilities used for CLI and stored duration strings.

fn unit(value: i64, singular: &str) -> String {
    if value == 1 {
        format!("{} {}", value, singular)
    } else {
        format!("{} {}s", value, singular)
    }
}

/// Render hours/minutes as "2 Hours 45 Minutes".
///
/// A zero clause is left out; both zero gives "0 Minutes".
pub fn hm2readable(hours: i64, minutes: i64) -> String {
    let mut parts = Vec::with_capacity(2);
    if hours != 0 {
        parts.push(unit(hours, "Hour"));
    }
    if minutes != 0 {
        parts.push(unit(minutes, "Minute"));
    }

    if parts.is_empty() {
        "0 Minutes".to_string()
    } else {
        parts.join(" ")
    }
}

/// Short placeholder for optional values in tables.
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "--".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singular_only_for_one() {
        assert_eq!(hm2readable(1, 1), "1 Hour 1 Minute");
        assert_eq!(hm2readable(2, 1), "2 Hours 1 Minute");
        assert_eq!(hm2readable(1, 2), "1 Hour 2 Minutes");
    }

    #[test]
    fn zero_clauses_are_omitted() {
        assert_eq!(hm2readable(3, 0), "3 Hours");
        assert_eq!(hm2readable(0, 59), "59 Minutes");
        assert_eq!(hm2readable(0, 0), "0 Minutes");
    }

    #[test]
    fn dash_for_missing() {
        assert_eq!(or_dash(None), "--");
        assert_eq!(or_dash(Some(" ")), "--");
        assert_eq!(or_dash(Some("x")), "x");
    }
}
