use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use thiserror::Error;

use crate::spec::unit::VideoUnit;

const BUILTIN_UNITS: &str = include_str!("../content/units.json");

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read units from {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse units: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only, ordered collection of video units.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitStore {
    units: Vec<VideoUnit>,
}

impl UnitStore {
    pub fn new(units: Vec<VideoUnit>) -> Self {
        Self { units }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Units compiled into the crate.
    pub fn builtin() -> Result<Self, StoreError> {
        Self::from_json_str(BUILTIN_UNITS)
    }

    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let units: Vec<VideoUnit> = serde_json::from_str(json)?;
        debug!("[Store] Loaded {} unit(s)", units.len());
        Ok(Self { units })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn units(&self) -> &[VideoUnit] {
        &self.units
    }

    pub fn unit_at(&self, index: usize) -> Option<&VideoUnit> {
        self.units.get(index)
    }

    pub fn first(&self) -> Option<&VideoUnit> {
        self.unit_at(0)
    }

    pub fn find(&self, id: &str) -> Option<&VideoUnit> {
        self.units.iter().find(|unit| unit.id == id)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
