//! Static coffee profile catalog.
//!
//! The catalog is embedded in the binary at compile time and parsed once at
//! startup. Its profile order is the order of the segments on the method wheel.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::num::NonZeroUsize;

use crate::models::CoffeeProfile;

/// Catalog schema from profiles.json.
#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    #[allow(dead_code)]
    version: String,
    profiles: Vec<CoffeeProfile>,
}

/// Ordered, validated set of coffee profiles with O(1) lookup by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Profiles in wheel order
    profiles: Vec<CoffeeProfile>,
    /// Fast lookup by profile id
    lookup: HashMap<String, usize>,
}

impl Catalog {
    /// Loads the catalog from the embedded JSON file.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("profiles.json");
        Self::from_json(json_data).context("Failed to load embedded profiles.json")
    }

    /// Parses and validates a catalog document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, the catalog is empty, an id
    /// appears twice, or any profile fails validation.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile =
            serde_json::from_str(json).context("Failed to parse profile catalog")?;
        Self::from_profiles(file.profiles)
    }

    /// Builds a catalog from already-parsed profiles.
    pub fn from_profiles(profiles: Vec<CoffeeProfile>) -> Result<Self> {
        if profiles.is_empty() {
            anyhow::bail!("Profile catalog is empty");
        }

        let mut lookup = HashMap::with_capacity(profiles.len());
        for (idx, profile) in profiles.iter().enumerate() {
            profile.validate()?;
            if lookup.insert(profile.id.clone(), idx).is_some() {
                anyhow::bail!("Duplicate profile id '{}'", profile.id);
            }
        }

        Ok(Self { profiles, lookup })
    }

    /// Number of profiles (wheel segments).
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Always false for a loaded catalog; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Number of wheel segments; a catalog is never empty.
    #[must_use]
    pub fn segment_count(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.profiles.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// Profile ids in wheel order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.id.as_str())
    }

    /// All profiles in wheel order.
    #[must_use]
    pub fn profiles(&self) -> &[CoffeeProfile] {
        &self.profiles
    }

    /// Look up a profile by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CoffeeProfile> {
        self.lookup.get(id).map(|&idx| &self.profiles[idx])
    }

    /// Look up a profile by its wheel position.
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&CoffeeProfile> {
        self.profiles.get(index)
    }

    /// Wheel position of a profile id.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.lookup.get(id).copied()
    }

    /// Look up a profile by id, failing with a list of valid ids.
    pub fn require(&self, id: &str) -> Result<&CoffeeProfile> {
        self.get(id).ok_or_else(|| {
            let valid: Vec<&str> = self.ids().collect();
            anyhow::anyhow!(
                "Unknown profile '{}'. Valid profiles: {}",
                id,
                valid.join(", ")
            )
        })
    }
}
