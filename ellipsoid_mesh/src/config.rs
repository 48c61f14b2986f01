use crate::geometry::ellipsoid::{EllipsoidErrors, EllipsoidMeshGenerator};
use crate::mesh::Point3D;
use glam::Vec3;
use ron::ser::{PrettyConfig, to_string_pretty};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigErrors {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("could not write config: {0}")]
    RonWrite(#[from] ron::Error),
}

/// Parameters of an [`EllipsoidMeshGenerator`], as stored in a RON file.
///
/// Missing fields fall back to a unit sphere at the origin with 16 stacks and
/// 32 slices.
///
/// ```text
/// (
///     center: (0.0, 0.0, 1.0),
///     radii: (2.0, 1.0, 1.0),
///     stacks: 24,
/// )
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EllipsoidConfig {
    pub center: Point3D,
    pub radii: Point3D,
    pub stacks: usize,
    pub slices: usize,
}

impl Default for EllipsoidConfig {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            radii: Vec3::ONE,
            stacks: 16,
            slices: 32,
        }
    }
}

impl EllipsoidConfig {
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigErrors> {
        Ok(ron::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigErrors> {
        let file = File::open(path.as_ref())?;
        let config = ron::de::from_reader(file)?;
        log::debug!("loaded ellipsoid config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn to_ron_string(&self) -> Result<String, ConfigErrors> {
        Ok(to_string_pretty(self, PrettyConfig::default())?)
    }

    pub fn build(&self) -> Result<EllipsoidMeshGenerator, EllipsoidErrors> {
        EllipsoidMeshGenerator::new(self.center, self.radii, self.stacks, self.slices)
    }
}

impl From<&EllipsoidMeshGenerator> for EllipsoidConfig {
    fn from(generator: &EllipsoidMeshGenerator) -> Self {
        Self {
            center: generator.center(),
            radii: generator.radii(),
            stacks: generator.stack_count(),
            slices: generator.slice_count(),
        }
    }
}
