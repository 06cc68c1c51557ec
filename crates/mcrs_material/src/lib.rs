pub mod attribute;
pub mod behaviour;
pub mod capability;
pub mod catalog;
pub mod codec;
mod config;
mod error;
pub mod family;
pub mod material;
pub mod overrides;
pub mod variant;

pub use attribute::Attributes;
pub use attribute::tag::Tag;
pub use behaviour::Properties;
pub use capability::{
    Ageable, Attachable, Directional, FuelSource, Openable, Powerable, RailShaped, Rotatable,
    SlabTyped, Variantable,
};
pub use catalog::Catalog;
pub use codec::{Capabilities, Codec, Unpack};
pub use config::{MaterialConfig, OVERRIDES_ENV};
pub use error::MaterialError;
pub use family::{AnyFamily, Family, FamilyDescriptor, VariantRecord};
pub use material::Material;
pub use overrides::ContentOverrides;
pub use variant::{Physical, Variant};

use bevy_app::{App, Plugin};
use tracing::{error, info, warn};

/// Bootstraps the built-in [`Catalog`], applies the configured content overrides and
/// inserts the result as a resource.
pub struct MaterialPlugin;

impl Plugin for MaterialPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<MaterialConfig>()
            .cloned()
            .unwrap_or_default();

        let catalog = match Catalog::bootstrap() {
            Ok(catalog) => catalog,
            Err(err) => {
                error!(%err, "failed to bootstrap material catalog");
                return;
            }
        };

        if let Some(path) = &config.overrides {
            match ContentOverrides::load(path).and_then(|overrides| overrides.apply(&catalog)) {
                Ok(applied) => info!(applied, path = %path.display(), "applied content overrides"),
                Err(err) => warn!(%err, path = %path.display(), "content overrides not applied"),
            }
        }

        app.insert_resource(catalog);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcrs_protocol::{BlockId, DataValue, LegacyBlockState};

    #[test]
    fn plugin_inserts_catalog() {
        let mut app = App::new();
        app.add_plugins(MaterialPlugin);

        let catalog = app.world().resource::<Catalog>();
        let chest = catalog
            .decode(LegacyBlockState::new(BlockId(54), DataValue::from_bits_truncate(3)))
            .unwrap();
        assert_eq!(chest.name, "SOUTH");
    }

    #[test]
    fn plugin_keeps_catalog_when_overrides_are_missing() {
        let mut app = App::new();
        app.insert_resource(MaterialConfig {
            overrides: Some("/nonexistent/overrides.json".into()),
            ..Default::default()
        });
        app.add_plugins(MaterialPlugin);

        assert!(app.world().contains_resource::<Catalog>());
    }
}
