pub mod config;
pub mod geometry;
pub mod mesh;
pub mod vertex;

pub use config::{ConfigErrors, EllipsoidConfig};
pub use geometry::ellipsoid::{EllipsoidErrors, EllipsoidMeshGenerator};
pub use mesh::{Mesh, Point3D};
pub use vertex::Vertex;

use geometry::GeometryErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EllipsoidMeshErrors {
    #[error("{0}")]
    Config(#[from] ConfigErrors),
    #[error("{0}")]
    Geometry(#[from] GeometryErrors),
}

impl From<EllipsoidErrors> for EllipsoidMeshErrors {
    fn from(value: EllipsoidErrors) -> Self {
        EllipsoidMeshErrors::Geometry(GeometryErrors::from(value))
    }
}
