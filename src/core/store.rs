//! Calibration store: exactly one calibration record per map.

use crate::{
    core::{
        calibration::{Calibration, CalibrationUpdate},
        maps::{MapDescriptor, MapId},
    },
    prelude::HashMap,
    Error, Result,
};

/// Holds the live calibration of every known map.
///
/// Records are created from the map defaults on construction and only change
/// through [`CalibrationStore::update`]. Updating one map never touches another.
#[derive(Debug, Clone)]
pub struct CalibrationStore {
    records: HashMap<MapId, Calibration>,
}

impl CalibrationStore {
    /// Creates a store seeded with the default calibration of each descriptor
    pub fn new<'a>(maps: impl IntoIterator<Item = &'a MapDescriptor>) -> Self {
        let records = maps
            .into_iter()
            .map(|map| (map.id, map.default_calibration))
            .collect();
        Self { records }
    }

    /// Creates a store for the built-in map table
    pub fn with_builtin_maps() -> Self {
        Self::new(crate::core::maps::all())
    }

    /// Current calibration of a map.
    ///
    /// Unknown ids yield the identity calibration rather than failing.
    pub fn get(&self, id: MapId) -> Calibration {
        match self.records.get(&id) {
            Some(calibration) => *calibration,
            None => {
                log::warn!("No calibration for map {}, using identity", id);
                Calibration::identity()
            }
        }
    }

    /// Merges `update` into the map's record and returns the merged record.
    ///
    /// The new record is computed in full before it replaces the old one, so
    /// readers never observe a partially applied update.
    pub fn update(&mut self, id: MapId, update: &CalibrationUpdate) -> Result<Calibration> {
        let record = self.records.get_mut(&id).ok_or(Error::UnknownMap(id.0))?;
        let merged = record.merged(update);
        log::debug!("Calibration for map {} updated: {:?}", id, merged);
        *record = merged;
        Ok(merged)
    }

    pub fn contains(&self, id: MapId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for CalibrationStore {
    fn default() -> Self {
        Self::with_builtin_maps()
    }
}
