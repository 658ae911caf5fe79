//! Material catalog: named presets plus one editable "Custom" entry.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::Material;
use crate::errors::{CalcError, CalcResult};

/// Name of the editable catalog entry
pub const CUSTOM_MATERIAL_NAME: &str = "Custom";

static STANDARD_CATALOG: Lazy<MaterialCatalog> = Lazy::new(|| MaterialCatalog {
    entries: vec![
        Material::new("Structural Steel S235", 235.0, 210.0, 7850.0, 0.30, 1.2e-5),
        Material::new("Structural Steel S275", 275.0, 210.0, 7850.0, 0.30, 1.2e-5),
        Material::new("Structural Steel S355", 355.0, 210.0, 7850.0, 0.30, 1.2e-5),
        Material::new("Stainless Steel 304", 215.0, 193.0, 8000.0, 0.29, 1.73e-5),
        Material::new("Aluminum 6061-T6", 276.0, 68.9, 2700.0, 0.33, 2.36e-5),
        Material::new("Aluminum 6063-T5", 145.0, 68.3, 2700.0, 0.33, 2.34e-5),
        Material::custom(),
    ],
});

/// An ordered, name-keyed list of materials.
///
/// The shared [`MaterialCatalog::standard`] table is immutable. Clone it (or
/// build a new catalog) to edit the Custom entry or add presets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCatalog {
    entries: Vec<Material>,
}

impl MaterialCatalog {
    /// The built-in preset table.
    pub fn standard() -> &'static MaterialCatalog {
        &STANDARD_CATALOG
    }

    /// Build a catalog from explicit entries. A Custom entry is appended
    /// when none is present.
    pub fn from_entries(entries: Vec<Material>) -> Self {
        let mut catalog = MaterialCatalog { entries };
        if catalog.find(CUSTOM_MATERIAL_NAME).is_none() {
            catalog.entries.push(Material::custom());
        }
        catalog
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[Material] {
        &self.entries
    }

    /// Entry names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|m| m.name.as_str())
    }

    fn find(&self, name: &str) -> Option<&Material> {
        self.entries
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name))
    }

    /// Look up a material by name (case-insensitive).
    pub fn get(&self, name: &str) -> CalcResult<Material> {
        self.find(name)
            .cloned()
            .ok_or_else(|| CalcError::material_not_found(name))
    }

    /// Replace the Custom entry's properties. The name is forced to "Custom".
    pub fn set_custom(&mut self, mut material: Material) {
        material.name = CUSTOM_MATERIAL_NAME.to_string();
        match self
            .entries
            .iter_mut()
            .find(|m| m.name == CUSTOM_MATERIAL_NAME)
        {
            Some(slot) => *slot = material,
            None => self.entries.push(material),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_lookup() {
        let catalog = MaterialCatalog::standard();
        let al = catalog.get("aluminum 6061-t6").unwrap();
        assert_eq!(al.elastic_modulus_gpa, 68.9);
        assert!(catalog.names().any(|n| n == CUSTOM_MATERIAL_NAME));
    }

    #[test]
    fn test_missing_material() {
        let err = MaterialCatalog::standard().get("Unobtainium").unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_set_custom_leaves_standard_untouched() {
        let mut catalog = MaterialCatalog::standard().clone();
        catalog.set_custom(Material::new("Anything", 100.0, 50.0, 1000.0, 0.2, 0.0));

        let custom = catalog.get(CUSTOM_MATERIAL_NAME).unwrap();
        assert_eq!(custom.yield_strength_mpa, 100.0);
        assert_eq!(custom.name, CUSTOM_MATERIAL_NAME);

        let pristine = MaterialCatalog::standard().get(CUSTOM_MATERIAL_NAME).unwrap();
        assert_eq!(pristine.yield_strength_mpa, 0.0);
    }

    #[test]
    fn test_from_entries_adds_custom() {
        let catalog = MaterialCatalog::from_entries(vec![Material::new("Timber", 24.0, 11.0, 420.0, 0.35, 5e-6)]);
        assert_eq!(catalog.entries().len(), 2);
        assert!(catalog.get(CUSTOM_MATERIAL_NAME).is_ok());
    }
}
