//! Content overrides: extra names and renames applied to a bootstrapped [`Catalog`].
//!
//! ```json
//! { "families": { "minecraft:chest": { "aliases": { "SOUTH_FACING": 3 }, "names": { "3": "SOUTHWARD" } } } }
//! ```

use crate::catalog::Catalog;
use crate::error::MaterialError;
use mcrs_protocol::DataValue;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContentOverrides {
    pub families: BTreeMap<String, FamilyOverride>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FamilyOverride {
    /// Additional names for existing data values.
    pub aliases: BTreeMap<String, u8>,
    /// New primary names; the previous name of each data value is forgotten.
    pub names: BTreeMap<u8, String>,
}

impl ContentOverrides {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, MaterialError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, MaterialError> {
        let bytes = std::fs::read(path)?;
        Self::from_slice(&bytes)
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Applies every entry in key order, renames before aliases within a family. Stops at the
    /// first entry naming an unknown family or data value; earlier entries stay applied.
    ///
    /// Returns the number of names written.
    pub fn apply(&self, catalog: &Catalog) -> Result<usize, MaterialError> {
        let mut applied = 0;
        for (identifier, overrides) in &self.families {
            let family = catalog
                .get(identifier)
                .ok_or_else(|| MaterialError::UnknownFamily(identifier.clone()))?;
            let unknown_code = |code: u8| MaterialError::UnknownCode {
                family: family.identifier().as_str().to_owned(),
                code,
            };

            for (&code, name) in &overrides.names {
                let value = DataValue::new(code).ok_or_else(|| unknown_code(code))?;
                if !family.rename(value, name) {
                    return Err(unknown_code(code));
                }
                debug!(family = family.name(), code, variant = %name, "renamed variant");
                applied += 1;
            }
            for (name, &code) in &overrides.aliases {
                let value = DataValue::new(code).ok_or_else(|| unknown_code(code))?;
                if !family.alias(name, value) {
                    return Err(unknown_code(code));
                }
                debug!(family = family.name(), code, alias = %name, "aliased variant");
                applied += 1;
            }
        }
        Ok(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Directional;
    use crate::catalog::minecraft::CHEST;
    use mcrs_protocol::Direction;

    const CHEST_OVERRIDES: &str = r#"{
        "families": {
            "minecraft:chest": {
                "aliases": { "SOUTH_FACING": 3 },
                "names": { "4": "WESTWARD" }
            }
        }
    }"#;

    #[test]
    fn applies_aliases_and_renames() {
        let catalog = Catalog::bootstrap().unwrap();
        let overrides = ContentOverrides::from_slice(CHEST_OVERRIDES.as_bytes()).unwrap();
        assert_eq!(overrides.apply(&catalog).unwrap(), 2);

        let chest = catalog.family(&CHEST).unwrap();
        assert_eq!(chest.by_name("south_facing").unwrap().facing(), Direction::South);
        assert_eq!(chest.by_name("SOUTH").unwrap().facing(), Direction::South);
        assert_eq!(chest.by_name("WESTWARD").unwrap().facing(), Direction::West);
        assert!(chest.by_name("WEST").is_none());

        let record = catalog.get("chest").unwrap().variant_by_code(DataValue::from_bits_truncate(4));
        assert_eq!(record.unwrap().name, "WESTWARD");
    }

    #[test]
    fn family_keys_default_to_minecraft_namespace() {
        let catalog = Catalog::bootstrap().unwrap();
        let overrides =
            ContentOverrides::from_slice(br#"{ "families": { "wheat": { "aliases": { "GOLDEN": 7 } } } }"#)
                .unwrap();
        assert_eq!(overrides.apply(&catalog).unwrap(), 1);
        let wheat = catalog.get("minecraft:wheat").unwrap();
        assert_eq!(wheat.variant_by_name("golden").unwrap().code, DataValue::from_bits_truncate(7));
    }

    #[test]
    fn unknown_family_stops_processing() {
        let catalog = Catalog::bootstrap().unwrap();
        let overrides = ContentOverrides::from_slice(
            br#"{ "families": {
                "minecraft:chest": { "aliases": { "FIRST": 2 } },
                "minecraft:not_a_block": { "aliases": { "X": 0 } },
                "minecraft:torch": { "aliases": { "NEVER": 5 } }
            } }"#,
        )
        .unwrap();
        assert!(matches!(
            overrides.apply(&catalog),
            Err(MaterialError::UnknownFamily(family)) if family == "minecraft:not_a_block"
        ));
        assert!(catalog.get("chest").unwrap().variant_by_name("FIRST").is_some());
        assert!(catalog.get("torch").unwrap().variant_by_name("NEVER").is_none());
    }

    #[test]
    fn unknown_code_is_rejected() {
        let catalog = Catalog::bootstrap().unwrap();
        for json in [
            r#"{ "families": { "chest": { "aliases": { "NOWHERE": 9 } } } }"#,
            r#"{ "families": { "chest": { "names": { "200": "NOWHERE" } } } }"#,
        ] {
            let overrides = ContentOverrides::from_slice(json.as_bytes()).unwrap();
            assert!(matches!(
                overrides.apply(&catalog),
                Err(MaterialError::UnknownCode { code, .. }) if code == 9 || code == 200
            ));
        }
    }

    #[test]
    fn malformed_and_missing_files() {
        assert!(matches!(
            ContentOverrides::from_slice(b"{ \"families\": 3 }"),
            Err(MaterialError::Json(_))
        ));
        assert!(matches!(
            ContentOverrides::load("/nonexistent/overrides.json"),
            Err(MaterialError::Io(_))
        ));
        assert!(ContentOverrides::from_slice(b"{}").unwrap().is_empty());
    }
}
