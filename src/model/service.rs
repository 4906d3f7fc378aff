use std::collections::HashMap;
use std::collections::hash_map;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Charges keyed by service name. Order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceCharges(HashMap<String, f64>);

impl ServiceCharges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a JSON object such as `{"Walking": 20.0, "Grooming": 40.0}`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        let charges = serde_json::from_str(&raw)?;
        Ok(charges)
    }

    /// Returns the previous charge when the service was already listed.
    pub fn insert(&mut self, service: impl Into<String>, charge: f64) -> Option<f64> {
        self.0.insert(service.into(), charge)
    }

    pub fn get(&self, service: &str) -> Option<f64> {
        self.0.get(service).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, f64> {
        self.0.iter()
    }

    pub fn total(&self) -> f64 {
        sum_charges(self)
    }
}

pub(crate) fn sum_charges<'a, I>(charges: I) -> f64
where
    I: IntoIterator<Item = (&'a String, &'a f64)>,
{
    charges.into_iter().fold(0.0, |acc, (_, charge)| acc + charge)
}

impl From<HashMap<String, f64>> for ServiceCharges {
    fn from(map: HashMap<String, f64>) -> Self {
        Self(map)
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ServiceCharges {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<'a> IntoIterator for &'a ServiceCharges {
    type Item = (&'a String, &'a f64);
    type IntoIter = hash_map::Iter<'a, String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
