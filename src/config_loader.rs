use crate::allocation::{allocate_vlsm, AllocationPlan};
use crate::config::PlanConfig;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::{debug, info};
use std::fs::File;
use std::path::Path;

/// Load and validate a plan from a YAML file
pub fn load_plan(plan_path: &Path) -> Result<PlanConfig> {
    info!("Loading plan from: {:?}", plan_path);

    let file = File::open(plan_path)
        .wrap_err_with(|| format!("Failed to open plan file '{}'", plan_path.display()))?;

    let plan: PlanConfig = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse plan file '{}'", plan_path.display()))?;

    debug!("Plan lists {} networks from base {}", plan.networks.len(), plan.base_address);

    plan.validate()?;

    Ok(plan)
}

/// Load a plan file and run the VLSM allocator over it
pub fn allocate_from_file(plan_path: &Path) -> Result<AllocationPlan> {
    let config = load_plan(plan_path)?;
    let base = config.base()?;
    let plan = allocate_vlsm(config.requests(), config.start_index(), base)?;
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_plan() {
        let yaml = r#"
base_address: "192.168.4.0"
networks:
  - name: "A"
    hosts: 50
  - name: "B"
    hosts: 10
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        let plan = load_plan(temp_file.path()).unwrap();
        assert_eq!(plan.networks.len(), 2);
        assert_eq!(plan.start_index(), 0);
    }

    #[test]
    fn test_allocate_from_file() {
        let yaml = r#"
base_address: 192.168.4.0
networks:
  - name: A
    hosts: 50
  - name: B
    hosts: 10
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        let plan = allocate_from_file(temp_file.path()).unwrap();
        assert_eq!(plan.records()[0].network().to_string(), "192.168.4.0/26");
        assert_eq!(plan.records()[1].network().to_string(), "192.168.4.64/28");
    }

    #[test]
    fn test_invalid_plan_is_rejected() {
        let yaml = r#"
base_address: 192.168.4.300
networks:
  - name: A
    hosts: 50
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        let err = load_plan(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid base address"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_plan(Path::new("/nonexistent/plan.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to open plan file"));
    }
}
