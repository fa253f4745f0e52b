//! Load a resource catalog from TOML

use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::{ResourceCatalog, ResourceDefinition};
use crate::core::error::Result;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "resource")]
    resources: Vec<ResourceDefinition>,
}

impl ResourceCatalog {
    /// Parse `[[resource]]` tables into a catalog
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(contents)?;
        ResourceCatalog::new(file.resources)
    }
}

/// Load a catalog from a TOML file on disk
pub fn load_catalog(path: &Path) -> Result<ResourceCatalog> {
    let contents = fs::read_to_string(path)?;
    let catalog = ResourceCatalog::from_toml_str(&contents)?;
    tracing::debug!("Loaded {} resources from {:?}", catalog.len(), path);
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ResourceCategory;
    use crate::core::error::PolicyError;
    use crate::core::types::ResourceId;

    #[test]
    fn test_parse_resources() {
        let toml = r#"
            [[resource]]
            id = 7
            name = "Test Tonic"
            heal_amount = 9
            category = "health"

            [[resource]]
            id = 8
            name = "Test Bomb"
            category = "damage"
        "#;
        let catalog = ResourceCatalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup(ResourceId(7)).unwrap().heal_amount, 9);
        let bomb = catalog.lookup(ResourceId(8)).unwrap();
        assert_eq!(bomb.heal_amount, 0);
        assert_eq!(bomb.category, ResourceCategory::Damage);
    }

    #[test]
    fn test_unknown_category_fails() {
        let toml = "[[resource]]\nid = 1\nname = \"X\"\ncategory = \"mana\"\n";
        assert!(matches!(
            ResourceCatalog::from_toml_str(toml),
            Err(PolicyError::TomlError(_))
        ));
    }

    #[test]
    fn test_empty_file_is_empty_catalog() {
        let catalog = ResourceCatalog::from_toml_str("").unwrap();
        assert!(catalog.is_empty());
    }
}
