//! The registry of compiled plans.

use std::{collections::HashMap, sync::Arc};

use tracing::{debug, info};

use crate::{
    config::{
        registration::{find_registration, registered_profiles},
        Profile,
    },
    errors::ConfigError,
    mapper::Mapper,
    plan::{PlanDescription, TypeMap, TypePair},
};

pub(crate) type TypeMaps = Arc<HashMap<TypePair, TypeMap>>;

/// Every compiled `TypeMap`, keyed by type pair. Immutable once built.
///
/// Cloning shares the same plan table.
#[derive(Debug, Clone, Default)]
pub struct MapperConfiguration {
    type_maps: TypeMaps,
}

impl MapperConfiguration {
    /// Compiles every declaration of every profile, in the order supplied.
    ///
    /// A later declaration of an already declared pair replaces it outright.
    pub fn new(profiles: impl IntoIterator<Item = Profile>) -> Result<Self, ConfigError> {
        let mut type_maps = HashMap::new();
        let mut profile_count = 0;

        for profile in profiles {
            profile_count += 1;
            let profile_name = profile.name().to_string();

            for declaration in profile.into_declarations() {
                let type_map = TypeMap::compile(&declaration)?;
                if let Some(previous) = type_maps.insert(type_map.pair(), type_map) {
                    debug!(
                        profile = %profile_name,
                        pair = %previous.pair(),
                        "replacing earlier declaration"
                    );
                }
            }
        }

        info!(
            profiles = profile_count,
            type_maps = type_maps.len(),
            "mapper configuration built"
        );

        Ok(Self {
            type_maps: Arc::new(type_maps),
        })
    }

    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    /// A new mapper sharing this configuration's plans.
    pub fn create_mapper(&self) -> Mapper {
        Mapper::new(Arc::clone(&self.type_maps))
    }

    pub fn type_map(&self, pair: &TypePair) -> Option<&TypeMap> {
        self.type_maps.get(pair)
    }

    pub fn contains(&self, pair: &TypePair) -> bool {
        self.type_maps.contains_key(pair)
    }

    pub fn len(&self) -> usize {
        self.type_maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.type_maps.is_empty()
    }

    /// Descriptions of every compiled plan, sorted by source then destination name.
    pub fn describe(&self) -> Vec<PlanDescription> {
        let mut plans: Vec<_> = self.type_maps.values().map(TypeMap::describe).collect();
        plans.sort_by(|a, b| {
            (a.source.as_str(), a.destination.as_str())
                .cmp(&(b.source.as_str(), b.destination.as_str()))
        });
        plans
    }
}

/// Collects profiles, from values or from registrations, before compiling them.
#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    profiles: Vec<Profile>,
}

impl ConfigurationBuilder {
    pub fn add_profile(mut self, profile: Profile) -> Self {
        self.profiles.push(profile);
        self
    }

    /// Adds the profile registered under `name`.
    pub fn add_registered(mut self, name: &str) -> Result<Self, ConfigError> {
        let registration = find_registration(name)
            .ok_or_else(|| ConfigError::invalid_profile(name, "no profile is registered under this name"))?;
        self.profiles.push(registration.build()?);
        Ok(self)
    }

    /// Adds every registered profile, ordered by name.
    pub fn add_all_registered(mut self) -> Result<Self, ConfigError> {
        for registration in registered_profiles() {
            self.profiles.push(registration.build()?);
        }
        Ok(self)
    }

    pub fn build(self) -> Result<MapperConfiguration, ConfigError> {
        MapperConfiguration::new(self.profiles)
    }
}
