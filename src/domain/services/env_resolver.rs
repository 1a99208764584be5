use std::collections::HashSet;

use crate::config::app_config::{AppConfig, EnvEntry};
use crate::domain::errors::{BrewenvError, Result};
use crate::domain::models::build_mode::BuildMode;
use crate::domain::models::environment::EnvironmentSettings;
use crate::domain::models::resolved_environment::Environment;
use crate::domain::variants;

/// Resolves custom environments down to a built-in variant
/// (development/production -> staging -> ...).
///
/// Each layer only replaces literal values, so the resolved record
/// always has the built-in shape.
pub struct EnvResolver;

impl EnvResolver {
    /// Resolve the named environment.
    ///
    /// Walks the `inherits` chain in `config` up to a built-in variant,
    /// then applies each overlay from root to leaf (later layers win).
    ///
    /// # Errors
    ///
    /// - `EnvironmentNotFound` if the environment or any parent is not
    ///   defined.
    /// - `CircularInheritance` if the chain contains a cycle.
    pub fn resolve(&self, name: &str, config: &AppConfig) -> Result<Environment> {
        let chain = self.build_chain(name, config)?;

        let (root, overlays) = chain
            .split_first()
            .ok_or_else(|| not_found(name, config))?;
        let mode = BuildMode::from_name(root).ok_or_else(|| not_found(root, config))?;

        let mut settings = variants::for_mode(mode).clone();
        for layer in overlays {
            if let Some(entry) = config.environments.get(layer) {
                settings = Self::apply(settings, entry);
            }
        }

        tracing::debug!(env = name, layers = %chain.join(" -> "), "resolved environment");

        let canonical = chain.last().cloned().unwrap_or_else(|| name.to_string());
        Ok(Environment {
            name: canonical,
            settings,
            layers: chain,
        })
    }

    /// Build the ordered inheritance chain from the built-in root to the
    /// target environment.
    ///
    /// For `staging` with `inherits = "production"`, returns
    /// `["production", "staging"]`. Built-in aliases (`dev`, `prod`)
    /// resolve to their canonical names.
    pub fn build_chain(&self, name: &str, config: &AppConfig) -> Result<Vec<String>> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut current = name.to_string();

        // Walk upward collecting ancestors
        loop {
            if let Some(mode) = BuildMode::from_name(&current) {
                chain.push(mode.name().to_string());
                break;
            }

            if visited.contains(&current) {
                chain.push(current.clone());
                let cycle: Vec<String> = chain.into_iter().rev().collect();
                return Err(BrewenvError::CircularInheritance {
                    chain: cycle.join(" -> "),
                });
            }

            let entry = config
                .environments
                .get(&current)
                .ok_or_else(|| not_found(&current, config))?;

            visited.insert(current.clone());
            chain.push(current.clone());

            current = entry
                .inherits
                .clone()
                .unwrap_or_else(|| BuildMode::Development.name().to_string());
        }

        // Reverse so root is first, leaf is last
        chain.reverse();
        Ok(chain)
    }

    /// Replace the literals `overlay` declares; keep everything else.
    fn apply(mut base: EnvironmentSettings, overlay: &EnvEntry) -> EnvironmentSettings {
        if let Some(production) = overlay.production {
            base.production = production;
        }
        if let Some(url) = &overlay.api_server_url {
            base.api_server_url = url.clone().into();
        }
        if let Some(auth) = &overlay.auth {
            if let Some(v) = &auth.domain_prefix {
                base.auth.domain_prefix = v.clone().into();
            }
            if let Some(v) = &auth.audience {
                base.auth.audience = v.clone().into();
            }
            if let Some(v) = &auth.client_id {
                base.auth.client_id = v.clone().into();
            }
            if let Some(v) = &auth.callback_url {
                base.auth.callback_url = v.clone().into();
            }
        }
        base
    }
}

fn not_found(name: &str, config: &AppConfig) -> BrewenvError {
    BrewenvError::EnvironmentNotFound {
        name: name.to_string(),
        available: config.environment_names().join(", "),
    }
}
