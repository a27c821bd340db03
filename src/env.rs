//! Environment variable configuration for `aed`.
//!
//! Read with `envy`, so `DEV_DEBUG=true` lands in `dev_debug` and so on.

use serde::Deserialize;

use crate::annotation::{AnnotatorConfig, AnnotatorConfigBuilder};

/// Environment configuration for the binary.
///
/// All fields are optional.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    /// Print errors with their `Debug` formatting instead of the short
    /// message.
    ///
    /// Set via: `DEV_DEBUG=true`
    #[serde(default)]
    pub dev_debug: bool,

    /// Skip the cascade filter entirely.
    ///
    /// Set via: `SKIP_CASCADE_FILTER=true`
    #[serde(default)]
    pub skip_cascade_filter: bool,

    /// Map the unfiltered detector output to labels.
    ///
    /// Set via: `MAP_UNFILTERED=true`
    #[serde(default)]
    pub map_unfiltered: bool,
}

impl EnvConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults if any variable fails to parse.
    pub fn load() -> Self {
        envy::from_env::<EnvConfig>().unwrap_or_default()
    }

    pub fn is_debug_mode(&self) -> bool {
        self.dev_debug
    }

    /// Annotator settings implied by the environment.
    pub fn annotator_config(&self) -> AnnotatorConfig {
        AnnotatorConfigBuilder::default()
            .apply_cascade_filter(!self.skip_cascade_filter)
            .map_unfiltered(self.map_unfiltered)
            .build()
            .unwrap_or_default()
    }
}
