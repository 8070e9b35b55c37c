//! Fluent bundle loading from embedded resources.

use cfbot_common::{CfBotError, Result};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::FluentResource;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

/// Thread-safe bundle type shared across command tasks.
pub type Bundle = FluentBundle<FluentResource>;

/// Language used when the requested one has no catalogue.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Catalogues compiled into the binary, keyed by language code.
static EMBEDDED_RESOURCES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([(DEFAULT_LANGUAGE, include_str!("../locales/en-US/main.ftl"))])
});

/// Fluent bundle loader.
pub struct FluentLoader;

impl FluentLoader {
    /// Language codes with an embedded catalogue, sorted.
    pub fn available_languages() -> Vec<&'static str> {
        let mut languages: Vec<_> = EMBEDDED_RESOURCES.keys().copied().collect();
        languages.sort_unstable();
        languages
    }

    /// Resolves a requested language to one that has a catalogue.
    pub fn resolve_language(language: &str) -> &'static str {
        EMBEDDED_RESOURCES
            .get_key_value(language)
            .map_or_else(
                || {
                    warn!("No catalogue for language '{language}', falling back to {DEFAULT_LANGUAGE}");
                    DEFAULT_LANGUAGE
                },
                |(key, _)| *key,
            )
    }

    /// Loads a fluent bundle for the given language.
    pub fn load_bundle(language: &str) -> Result<Bundle> {
        let language = Self::resolve_language(language);
        let source = EMBEDDED_RESOURCES
            .get(language)
            .ok_or_else(|| CfBotError::localization_with_locale("Missing catalogue", language))?;

        Self::bundle_from_source(language, source)
    }

    /// Builds a bundle from raw Fluent source.
    pub fn bundle_from_source(language: &str, source: &str) -> Result<Bundle> {
        let langid: LanguageIdentifier = language.parse().map_err(|e| {
            CfBotError::localization_with_locale(format!("Invalid language identifier: {e}"), language)
        })?;

        let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
            CfBotError::localization_with_locale(
                format!("Failed to parse Fluent resource: {errors:?}"),
                language,
            )
        })?;

        let mut bundle = FluentBundle::new_concurrent(vec![langid]);
        // Handles must render verbatim inside backticks
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).map_err(|errors| {
            CfBotError::localization_with_locale(
                format!("Failed to add Fluent resource: {errors:?}"),
                language,
            )
        })?;

        debug!("Loaded message catalogue for {language}");
        Ok(bundle)
    }
}
