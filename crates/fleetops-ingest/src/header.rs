//! Header column resolution
//!
//! Partner statements never agree on column naming, so columns are located by
//! matching normalized header cells (trimmed, lowercased) against a fixed
//! candidate table per role. Scanning runs left to right over the header row
//! and the first cell satisfying any candidate claims the role. The first
//! match wins even when a later column would also match; callers get no
//! ambiguity signal. That keeps resolution predictable for the statement
//! layouts partners actually send, at the cost of mis-picking on exotic
//! headers (a column named "discount" satisfies the order-count role).

use crate::error::SheetError;

/// A single candidate predicate over a normalized header cell.
#[derive(Debug, Clone, Copy)]
pub enum HeaderMatcher {
    /// Cell contains the needle.
    Contains(&'static str),
    /// Cell equals the value exactly.
    Equals(&'static str),
    /// Cell contains every needle.
    ContainsAll(&'static [&'static str]),
}

impl HeaderMatcher {
    fn matches(&self, normalized: &str) -> bool {
        match self {
            HeaderMatcher::Contains(needle) => normalized.contains(needle),
            HeaderMatcher::Equals(expected) => normalized == *expected,
            HeaderMatcher::ContainsAll(needles) => {
                needles.iter().all(|needle| normalized.contains(needle))
            }
        }
    }
}

const RIDER_ID_MATCHERS: &[HeaderMatcher] = &[
    HeaderMatcher::Contains("company_rider_id"),
    HeaderMatcher::Contains("company rider id"),
    HeaderMatcher::Contains("rider id"),
];

const RIDER_NAME_MATCHERS: &[HeaderMatcher] = &[
    HeaderMatcher::ContainsAll(&["rider", "name"]),
    HeaderMatcher::Equals("name"),
];

const ORDER_COUNT_MATCHERS: &[HeaderMatcher] = &[
    HeaderMatcher::Contains("order"),
    HeaderMatcher::Contains("count"),
    HeaderMatcher::Equals("orders"),
];

/// Resolved column index per semantic role. Rider identifier and order count
/// are required for a run; rider name is cosmetic and may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderColumns {
    pub rider_id: Option<usize>,
    pub rider_name: Option<usize>,
    pub order_count: Option<usize>,
}

impl HeaderColumns {
    /// Check that the required roles resolved, naming every missing one so the
    /// client sees the full list in a single response.
    pub fn require(&self) -> Result<(), SheetError> {
        let mut missing = Vec::new();
        if self.rider_id.is_none() {
            missing.push("rider identifier");
        }
        if self.order_count.is_none() {
            missing.push("order count");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(SheetError::MissingColumns(missing.join(", ")))
        }
    }
}

/// Resolve the three column roles against a decoded header row.
pub fn resolve_header(header: &[String]) -> HeaderColumns {
    HeaderColumns {
        rider_id: find_column(header, RIDER_ID_MATCHERS),
        rider_name: find_column(header, RIDER_NAME_MATCHERS),
        order_count: find_column(header, ORDER_COUNT_MATCHERS),
    }
}

fn find_column(header: &[String], matchers: &[HeaderMatcher]) -> Option<usize> {
    header.iter().position(|cell| {
        let normalized = cell.trim().to_lowercase();
        matchers.iter().any(|matcher| matcher.matches(&normalized))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_resolves_typical_statement_header() {
        let columns = resolve_header(&header(&["Rider ID", "Rider Name", "Orders"]));
        assert_eq!(columns.rider_id, Some(0));
        assert_eq!(columns.rider_name, Some(1));
        assert_eq!(columns.order_count, Some(2));
        assert!(columns.require().is_ok());
    }

    #[test]
    fn test_resolves_snake_case_header() {
        let columns = resolve_header(&header(&["company_rider_id", "order_count"]));
        assert_eq!(columns.rider_id, Some(0));
        assert_eq!(columns.rider_name, None);
        assert_eq!(columns.order_count, Some(1));
        assert!(columns.require().is_ok());
    }

    #[test]
    fn test_header_cells_are_trimmed_and_case_folded() {
        let columns = resolve_header(&header(&["  COMPANY RIDER ID  ", " Order Count "]));
        assert_eq!(columns.rider_id, Some(0));
        assert_eq!(columns.order_count, Some(1));
    }

    #[test]
    fn test_bare_name_column_claims_the_name_role() {
        let columns = resolve_header(&header(&["rider id", "Name", "orders"]));
        assert_eq!(columns.rider_name, Some(1));
    }

    #[test]
    fn test_rider_id_column_does_not_claim_the_name_role() {
        // "rider id" contains "rider" but not "name" and is not exactly "name".
        let columns = resolve_header(&header(&["rider id", "orders"]));
        assert_eq!(columns.rider_name, None);
    }

    #[test]
    fn test_first_matching_column_wins() {
        let columns = resolve_header(&header(&["rider id", "Total Orders", "Order Count"]));
        assert_eq!(columns.order_count, Some(1));
    }

    #[test]
    fn test_missing_order_count_is_reported() {
        let columns = resolve_header(&header(&["rider id", "rider name"]));
        let err = columns.require().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not identify required column(s): order count"
        );
    }

    #[test]
    fn test_all_missing_roles_are_listed_together() {
        let columns = resolve_header(&header(&["store", "city"]));
        let err = columns.require().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not identify required column(s): rider identifier, order count"
        );
    }
}
