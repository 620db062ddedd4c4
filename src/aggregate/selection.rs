//! Picking networks out of an allocation plan for summarization.

use crate::allocation::AllocationPlan;
use crate::error::{PlanError, Result};
use crate::ip::Network;

/// Parse a comma-separated list of one-based positions (`"1, 3"`) into
/// zero-based indices for a list of `len` items.
///
/// Repeated positions are kept once, in first-seen order.
pub fn parse_selection(text: &str, len: usize) -> Result<Vec<usize>> {
    let mut indices = Vec::new();
    for token in text.split(',').map(str::trim).filter(|token| !token.is_empty()) {
        let position: usize = token
            .parse()
            .map_err(|_| PlanError::InvalidSelection(token.to_string()))?;
        if position == 0 || position > len {
            return Err(PlanError::IndexOutOfRange { index: position, len });
        }
        if !indices.contains(&(position - 1)) {
            indices.push(position - 1);
        }
    }
    Ok(indices)
}

/// Resolve a selection against a plan, requiring at least two networks.
///
/// Positions count networks largest-first, matching the numbering of the
/// plan report, not the order the requests were given in.
pub fn select_networks(plan: &AllocationPlan, text: &str) -> Result<Vec<Network>> {
    let ranked = plan.in_sizing_order();
    let indices = parse_selection(text, ranked.len())?;
    if indices.len() < 2 {
        return Err(PlanError::InsufficientSelection(indices.len()));
    }

    let mut networks = Vec::with_capacity(indices.len());
    for index in indices {
        let record = ranked.get(index).ok_or(PlanError::IndexOutOfRange {
            index: index + 1,
            len: ranked.len(),
        })?;
        networks.push(record.network());
    }
    Ok(networks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::{allocate_vlsm, CapacityRequest};
    use std::net::Ipv4Addr;

    fn plan() -> AllocationPlan {
        let requests = vec![
            CapacityRequest::new("A", 100),
            CapacityRequest::new("B", 50),
            CapacityRequest::new("C", 50),
        ];
        allocate_vlsm(&requests, 0, Ipv4Addr::new(10, 0, 0, 0)).unwrap()
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1, 2", 3), Ok(vec![0, 1]));
        assert_eq!(parse_selection("3,1,3", 3), Ok(vec![2, 0]));
        assert_eq!(parse_selection(" 2 ,", 3), Ok(vec![1]));
        assert_eq!(parse_selection("", 3), Ok(vec![]));
    }

    #[test]
    fn test_parse_selection_errors() {
        assert_eq!(
            parse_selection("1, 4", 3),
            Err(PlanError::IndexOutOfRange { index: 4, len: 3 })
        );
        assert_eq!(
            parse_selection("0", 3),
            Err(PlanError::IndexOutOfRange { index: 0, len: 3 })
        );
        assert_eq!(
            parse_selection("1, two", 3),
            Err(PlanError::InvalidSelection("two".to_string()))
        );
        assert_eq!(
            parse_selection("-1", 3),
            Err(PlanError::InvalidSelection("-1".to_string()))
        );
    }

    #[test]
    fn test_select_networks() {
        let plan = plan();
        let selected = select_networks(&plan, "2,3").unwrap();
        assert_eq!(
            selected,
            vec!["10.0.0.128/26".parse().unwrap(), "10.0.0.192/26".parse().unwrap()]
        );
    }

    #[test]
    fn test_select_counts_largest_first() {
        let requests = vec![
            CapacityRequest::new("Printers", 10),
            CapacityRequest::new("Servers", 100),
            CapacityRequest::new("Staff", 50),
        ];
        let plan = allocate_vlsm(&requests, 0, Ipv4Addr::new(10, 0, 0, 0)).unwrap();

        // 1 = Servers, 2 = Staff, 3 = Printers
        assert_eq!(
            select_networks(&plan, "1, 2").unwrap(),
            vec!["10.0.0.0/25".parse().unwrap(), "10.0.0.128/26".parse().unwrap()]
        );
        assert_eq!(
            select_networks(&plan, "3, 1").unwrap(),
            vec!["10.0.0.192/28".parse().unwrap(), "10.0.0.0/25".parse().unwrap()]
        );
        assert_eq!(
            select_networks(&plan, "2, 4"),
            Err(PlanError::IndexOutOfRange { index: 4, len: 3 })
        );
    }

    #[test]
    fn test_select_requires_two() {
        let plan = plan();
        assert_eq!(select_networks(&plan, "1"), Err(PlanError::InsufficientSelection(1)));
        assert_eq!(select_networks(&plan, "1,1"), Err(PlanError::InsufficientSelection(1)));
    }
}
