use crate::build_planning::domain::Slot;
use crate::shared::error::BuildError;
use crate::shared::Result;
use std::str::FromStr;

/// One `slot=id` selection as typed on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSpec {
    pub slot: Slot,
    pub component_id: String,
}

impl SelectionSpec {
    pub fn new(slot: Slot, component_id: impl Into<String>) -> Self {
        Self {
            slot,
            component_id: component_id.into(),
        }
    }

    /// Parses `SLOT=ID`, e.g. `cpu=cpu-ryzen5-7600`
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = |reason: String| BuildError::InvalidSelection {
            input: input.to_string(),
            reason,
        };

        let (slot, id) = input
            .split_once('=')
            .ok_or_else(|| invalid("missing '=' between slot and id".to_string()))?;

        let slot = Slot::from_str(slot).map_err(invalid)?;

        let id = id.trim();
        if id.is_empty() {
            return Err(invalid("component id is empty".to_string()).into());
        }

        Ok(Self::new(slot, id))
    }
}

impl FromStr for SelectionSpec {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).map_err(|e| e.to_string())
    }
}

/// BuildRequest - selections to apply, in order, to an empty build
#[derive(Debug, Clone, Default)]
pub struct BuildRequest {
    pub selections: Vec<SelectionSpec>,
}

impl BuildRequest {
    pub fn new(selections: Vec<SelectionSpec>) -> Self {
        Self { selections }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let spec = SelectionSpec::parse("cpu=cpu-ryzen5-7600").unwrap();
        assert_eq!(spec, SelectionSpec::new(Slot::Cpu, "cpu-ryzen5-7600"));
    }

    #[test]
    fn test_parse_trims_and_ignores_slot_case() {
        let spec = SelectionSpec::parse("GPU= gpu-rtx4060 ").unwrap();
        assert_eq!(spec.slot, Slot::Gpu);
        assert_eq!(spec.component_id, "gpu-rtx4060");
    }

    #[test]
    fn test_parse_keeps_equals_in_id() {
        let spec = SelectionSpec::parse("ram=a=b").unwrap();
        assert_eq!(spec.component_id, "a=b");
    }

    #[test]
    fn test_parse_missing_equals() {
        let err = SelectionSpec::parse("cpu").unwrap_err().to_string();
        assert!(err.contains("missing '='"));
    }

    #[test]
    fn test_parse_unknown_slot() {
        let err = SelectionSpec::parse("monitor=lg-27").unwrap_err().to_string();
        assert!(err.contains("Invalid slot: monitor"));
    }

    #[test]
    fn test_parse_empty_id() {
        let err = SelectionSpec::parse("psu=").unwrap_err().to_string();
        assert!(err.contains("component id is empty"));
    }

    #[test]
    fn test_from_str_reports_message() {
        let err = "nope".parse::<SelectionSpec>().unwrap_err();
        assert!(err.contains("Invalid selection: 'nope'"));
    }
}
