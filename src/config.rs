use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

use crate::allocation::CapacityRequest;
use crate::ip::parse_address;

/// VLSM plan file that mirrors the YAML layout
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlanConfig {
    /// Address the first network is carved from (e.g., "192.168.4.0")
    pub base_address: String,
    /// (Optional) One-based position in the largest-first order to start
    /// assigning from (default: 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_start: Option<usize>,
    /// Networks to allocate, in input order
    pub networks: Vec<CapacityRequest>,
}

impl PlanConfig {
    /// Validate the plan
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.base()?;

        if self.networks.is_empty() {
            return Err(ValidationError::InvalidNetwork(
                "at least one network must be listed".to_string(),
            ));
        }

        for (position, request) in self.networks.iter().enumerate() {
            if request.name.trim().is_empty() {
                return Err(ValidationError::InvalidNetwork(format!(
                    "network {} has an empty name",
                    position + 1
                )));
            }
            if request.required_hosts <= 2 {
                return Err(ValidationError::InvalidNetwork(format!(
                    "network '{}' needs more than 2 hosts (got {})",
                    request.name, request.required_hosts
                )));
            }
        }

        if self.rotation_start == Some(0) {
            return Err(ValidationError::InvalidRotation(
                "rotation_start is one-based, use 1 for the largest network".to_string(),
            ));
        }

        Ok(())
    }

    /// Parsed base address
    pub fn base(&self) -> Result<Ipv4Addr, ValidationError> {
        parse_address(&self.base_address)
            .map_err(|e| ValidationError::InvalidBase(e.to_string()))
    }

    /// Zero-based rotation start; positions past the end are left for the
    /// allocator to reset
    pub fn start_index(&self) -> usize {
        self.rotation_start
            .map(|position| position.saturating_sub(1))
            .unwrap_or(0)
    }

    pub fn requests(&self) -> &[CapacityRequest] {
        &self.networks
    }
}

/// Plan file validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid base address: {0}")]
    InvalidBase(String),
    #[error("Invalid network list: {0}")]
    InvalidNetwork(String),
    #[error("Invalid rotation start: {0}")]
    InvalidRotation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_parsing() {
        let yaml = r#"
base_address: "192.168.4.0"
rotation_start: 2
networks:
  - name: "Sales"
    hosts: 50
  - name: "Lab"
    hosts: 10
"#;

        let plan: PlanConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(plan.validate().is_ok());
        assert_eq!(plan.base().unwrap(), Ipv4Addr::new(192, 168, 4, 0));
        assert_eq!(plan.start_index(), 1);
        assert_eq!(plan.requests()[0], CapacityRequest::new("Sales", 50));
        assert_eq!(plan.requests()[1].required_hosts, 10);
    }

    #[test]
    fn test_rotation_defaults_to_largest() {
        let yaml = r#"
base_address: 10.0.0.0
networks:
  - name: Core
    hosts: 3
"#;

        let plan: PlanConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(plan.validate().is_ok());
        assert_eq!(plan.rotation_start, None);
        assert_eq!(plan.start_index(), 0);
    }

    #[test]
    fn test_invalid_base_address() {
        let plan = PlanConfig {
            base_address: "192.168.4".to_string(),
            rotation_start: None,
            networks: vec![CapacityRequest::new("A", 10)],
        };
        assert!(matches!(plan.validate(), Err(ValidationError::InvalidBase(_))));
    }

    #[test]
    fn test_invalid_host_count() {
        let plan = PlanConfig {
            base_address: "10.0.0.0".to_string(),
            rotation_start: None,
            networks: vec![CapacityRequest::new("A", 10), CapacityRequest::new("B", 2)],
        };
        let err = plan.validate().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidNetwork(_)));
        assert!(err.to_string().contains("'B'"));
    }

    #[test]
    fn test_empty_plan_and_names() {
        let empty = PlanConfig {
            base_address: "10.0.0.0".to_string(),
            rotation_start: None,
            networks: Vec::new(),
        };
        assert!(empty.validate().is_err());

        let unnamed = PlanConfig {
            base_address: "10.0.0.0".to_string(),
            rotation_start: None,
            networks: vec![CapacityRequest::new("  ", 10)],
        };
        assert!(unnamed.validate().is_err());
    }

    #[test]
    fn test_zero_rotation_start() {
        let plan = PlanConfig {
            base_address: "10.0.0.0".to_string(),
            rotation_start: Some(0),
            networks: vec![CapacityRequest::new("A", 10)],
        };
        assert!(matches!(plan.validate(), Err(ValidationError::InvalidRotation(_))));
    }

    #[test]
    fn test_negative_hosts_rejected_by_parser() {
        let yaml = r#"
base_address: 10.0.0.0
networks:
  - name: A
    hosts: -5
"#;
        assert!(serde_yaml::from_str::<PlanConfig>(yaml).is_err());
    }
}
