pub mod options;
pub mod tracker_page;
pub mod tracker_row;
pub mod tracker_table;

use crate::core::Patch;
use crate::utils::error::{PatchError, Result};

/// The compiled-in patches, in the order they are normally applied.
pub fn builtin_patches() -> Vec<Patch> {
    vec![
        tracker_page::patch(),
        tracker_row::patch(),
        tracker_table::patch(),
    ]
}

pub fn builtin_patch(name: &str) -> Result<Patch> {
    builtin_patches()
        .into_iter()
        .find(|patch| patch.name == name)
        .ok_or_else(|| PatchError::UnknownPatch {
            name: name.to_string(),
        })
}

/// Keeps only the named patches, in the order given. An empty selection keeps everything.
pub fn select(patches: Vec<Patch>, names: &[String]) -> Result<Vec<Patch>> {
    if names.is_empty() {
        return Ok(patches);
    }

    names
        .iter()
        .map(|name| {
            patches
                .iter()
                .find(|patch| &patch.name == name)
                .cloned()
                .ok_or_else(|| PatchError::UnknownPatch { name: name.clone() })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::plan_config::PlanConfig;

    #[test]
    fn test_builtin_lookup() {
        assert_eq!(builtin_patch("row").unwrap().path, tracker_row::PATH);
        assert!(matches!(
            builtin_patch("nav"),
            Err(PatchError::UnknownPatch { .. })
        ));
    }

    #[test]
    fn test_select_order_and_unknown() {
        let names = vec!["table".to_string(), "page".to_string()];
        let selected = select(builtin_patches(), &names).unwrap();
        let selected: Vec<&str> = selected.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(selected, vec!["table", "page"]);

        assert_eq!(select(builtin_patches(), &[]).unwrap().len(), 3);
        assert!(select(builtin_patches(), &["nope".to_string()]).is_err());
    }

    #[test]
    fn test_bundled_plan_matches_builtins() {
        let plan = PlanConfig::from_toml_str(include_str!("../../../plans/tracker.toml")).unwrap();
        assert_eq!(plan.to_patches().unwrap(), builtin_patches());
    }
}
