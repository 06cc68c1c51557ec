use bevy_app::{App, AppExit, Startup};
use bevy_ecs::prelude::*;
use bevy_log::LogPlugin;
use mcrs_material::{Catalog, MaterialConfig, MaterialPlugin, VariantRecord};
use tracing::{error, info};

fn main() -> AppExit {
    App::new()
        .add_plugins(LogPlugin::default())
        .insert_resource(MaterialConfig::from_env())
        .add_plugins(MaterialPlugin)
        .add_systems(Startup, report)
        .run()
}

fn report(catalog: Option<Res<Catalog>>, config: Res<MaterialConfig>, mut exit: MessageWriter<AppExit>) {
    let Some(catalog) = catalog else {
        error!("material catalog is unavailable");
        exit.write(AppExit::error());
        return;
    };

    if !config.dump {
        for family in catalog.families() {
            info!(
                family = family.name(),
                identifier = %family.identifier(),
                block_id = %family.block_id(),
                variants = family.len(),
                capabilities = ?family.capabilities(),
            );
        }
        return;
    }

    let records: Vec<VariantRecord> = match &config.family {
        Some(identifier) => match catalog.get(identifier) {
            Some(family) => family.records(),
            None => {
                error!(family = %identifier, "unknown family");
                exit.write(AppExit::error());
                return;
            }
        },
        None => catalog.families().flat_map(|family| family.records()).collect(),
    };

    match serde_json::to_string_pretty(&records) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            error!(%err, "failed to serialize variant records");
            exit.write(AppExit::error());
        }
    }
}
