//! Bulk-allocation preview.
//!
//! Produces a short list of candidate addresses and hostnames for a bulk
//! request. Display-only: nothing is reserved against any pool.

use crate::error::PlanError;
use crate::models::{bump_last_octet, increment, parse_addr};
use std::net::Ipv4Addr;

/// Previews are capped at this many rows however large the request is.
pub const PREVIEW_LIMIT: usize = 5;

/// How candidate addresses step from the base.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IncrementStyle {
    /// Bump only the last octet, no carry. Faithful to the upstream
    /// behavior; breaks past `.255`.
    LastOctet,
    /// Full 32-bit increment with carry across octets.
    Carry,
}

/// One previewed allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewItem {
    pub ip: Ipv4Addr,
    pub hostname: String,
}

/// Generate up to [`PREVIEW_LIMIT`] sequential candidates from `base_text`.
///
/// Every literal `{n}` in `name_pattern` becomes the 1-based index,
/// zero-padded to two digits.
///
/// # Examples
/// ```
/// use ipam_planner::processing::{preview, IncrementStyle};
/// let items = preview("10.0.0.1", 3, "web-{n}", IncrementStyle::Carry).unwrap();
/// assert_eq!(items[2].ip.to_string(), "10.0.0.3");
/// assert_eq!(items[2].hostname, "web-03");
/// ```
pub fn preview(
    base_text: &str,
    count: usize,
    name_pattern: &str,
    style: IncrementStyle,
) -> Result<Vec<PreviewItem>, PlanError> {
    let base = parse_addr(base_text)?;
    let n = count.min(PREVIEW_LIMIT);
    let mut items = Vec::with_capacity(n);
    for i in 0..n {
        let ip = match style {
            IncrementStyle::LastOctet => bump_last_octet(base, i as u32),
            IncrementStyle::Carry => increment(base, i as u32)?,
        };
        let hostname = name_pattern.replace("{n}", &format!("{:02}", i + 1));
        items.push(PreviewItem { ip, hostname });
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_basic() {
        let items = preview("10.0.0.1", 3, "web-{n}", IncrementStyle::LastOctet).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].ip, Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(items[0].hostname, "web-01");
        assert_eq!(items[1].ip, Ipv4Addr::new(10, 0, 0, 2));
        assert_eq!(items[1].hostname, "web-02");
        assert_eq!(items[2].ip, Ipv4Addr::new(10, 0, 0, 3));
        assert_eq!(items[2].hostname, "web-03");
    }

    #[test]
    fn test_preview_caps_at_limit() {
        let items = preview("10.0.0.1", 100, "srv-{n}", IncrementStyle::Carry).unwrap();
        assert_eq!(items.len(), PREVIEW_LIMIT);
        assert_eq!(items[4].ip, Ipv4Addr::new(10, 0, 0, 5));
        assert_eq!(items[4].hostname, "srv-05");
    }

    #[test]
    fn test_preview_pattern_without_token() {
        let items = preview("10.0.0.1", 2, "static-name", IncrementStyle::Carry).unwrap();
        assert_eq!(items[0].hostname, "static-name");
        assert_eq!(items[1].hostname, "static-name");
    }

    #[test]
    fn test_preview_pattern_repeated_token() {
        let items = preview("10.0.0.1", 1, "{n}-host-{n}", IncrementStyle::Carry).unwrap();
        assert_eq!(items[0].hostname, "01-host-01");
    }

    #[test]
    fn test_increment_styles_diverge_at_octet_boundary() {
        let carry = preview("10.0.0.254", 3, "h{n}", IncrementStyle::Carry).unwrap();
        assert_eq!(carry[2].ip, Ipv4Addr::new(10, 0, 1, 0));

        let quirk = preview("10.0.0.254", 3, "h{n}", IncrementStyle::LastOctet).unwrap();
        assert_eq!(quirk[2].ip, Ipv4Addr::new(10, 0, 0, 0));
    }

    #[test]
    fn test_preview_zero_count() {
        let items = preview("10.0.0.1", 0, "h{n}", IncrementStyle::Carry).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_preview_bad_base() {
        assert!(matches!(
            preview("10.0.0", 3, "h{n}", IncrementStyle::Carry),
            Err(PlanError::InvalidFormat(_))
        ));
    }
}
