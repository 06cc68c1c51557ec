use bevy_ecs::prelude::Resource;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

/// Environment variable naming a content overrides file.
pub const OVERRIDES_ENV: &str = "MCRS_MATERIAL_OVERRIDES";

#[derive(Resource, Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MaterialConfig {
    /// JSON content overrides applied after bootstrap.
    pub overrides: Option<PathBuf>,
    /// Print every variant record as JSON instead of a summary.
    pub dump: bool,
    /// Restrict the dump to one family identifier.
    pub family: Option<String>,
}

impl MaterialConfig {
    /// Reads `--overrides <path>`, `--dump` and `--family <id>`. The first item is expected to
    /// be the program name.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter().map(Into::into).skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--dump" => config.dump = true,
                "--overrides" => match args.next() {
                    Some(path) => config.overrides = Some(path.into()),
                    None => warn!("--overrides expects a path"),
                },
                "--family" => match args.next() {
                    Some(family) => config.family = Some(family),
                    None => warn!("--family expects an identifier"),
                },
                other => warn!(argument = other, "ignoring unknown argument"),
            }
        }
        config
    }

    /// Command-line arguments, falling back to [`OVERRIDES_ENV`] for the overrides path.
    pub fn from_env() -> Self {
        let mut config = Self::from_args(std::env::args());
        if config.overrides.is_none() {
            config.overrides = std::env::var_os(OVERRIDES_ENV).map(PathBuf::from);
        }
        config
    }
}
