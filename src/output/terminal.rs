//! Terminal output helpers.

/// Quote a value and right-pad it into a report column.
///
/// `width` is a minimum: long values get their full quoted text so
/// columns drift rather than truncate.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    let pad = width.saturating_sub(quoted.len());
    format!("{}{}", " ".repeat(pad), quoted)
}

/// Format a requested/usable host pair, e.g. `50/62_hosts`.
pub fn format_host_pair(requested: u32, usable: i64) -> String {
    format!("{requested}/{usable}_hosts")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_pads_right() {
        assert_eq!(format_field("net", 8), "   \"net\"");
        assert_eq!(format_field(7, 5), "  \"7\"");
    }

    #[test]
    fn test_format_field_never_truncates() {
        assert_eq!(format_field("a-long-name", 4), "\"a-long-name\"");
        assert_eq!(format_field("abcd", 6), "\"abcd\"");
    }

    #[test]
    fn test_format_host_pair() {
        assert_eq!(format_host_pair(50, 62), "50/62_hosts");
        assert_eq!(format_host_pair(1, -1), "1/-1_hosts");
    }
}
