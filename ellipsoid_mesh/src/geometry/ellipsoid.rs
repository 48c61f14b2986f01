use super::MIN_RESOLUTION;
use crate::mesh::{Mesh, Point3D};
use glam::vec3;
use std::f64::consts::{FRAC_PI_2, PI};

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EllipsoidErrors {
    #[error("ellipsoid needs at least 2 stacks and 2 slices, got {stacks} stacks and {slices} slices")]
    InvalidResolution { stacks: usize, slices: usize },
}

fn check_resolution(stacks: usize, slices: usize) -> Result<(), EllipsoidErrors> {
    if stacks < MIN_RESOLUTION || slices < MIN_RESOLUTION {
        return Err(EllipsoidErrors::InvalidResolution { stacks, slices });
    }
    Ok(())
}

/// Lat-long tessellation of an axis-aligned ellipsoid.
///
/// Stack `i` sits at latitude `phi = -pi/2 + i * pi / (stacks - 1)` and slice
/// `j` at longitude `theta = -pi + j * 2pi / (slices - 1)`, so both poles and
/// both ends of the longitude range are sampled. The first and last slice
/// coincide (the seam is not deduplicated) and every cell of the first and
/// last stack collapses onto a pole.
///
/// Normals are the unit sphere direction `(cos phi cos theta, cos phi sin theta,
/// sin phi)`. That is the true surface normal only when all three radii are
/// equal.
///
/// Every setter recomputes the whole grid before returning. Changing the
/// resolution replaces the grid, changing the center or radii rewrites it in
/// place.
#[derive(Clone, Debug)]
pub struct EllipsoidMeshGenerator {
    center: Point3D,
    radii: Point3D,
    stacks: usize,
    slices: usize,
    mesh: Mesh,
}

impl EllipsoidMeshGenerator {
    /// Builds the generator and fills its mesh.
    ///
    /// Radii are taken as given; zero or negative values flatten the surface
    /// but are not an error.
    pub fn new(
        center: Point3D,
        radii: Point3D,
        stacks: usize,
        slices: usize,
    ) -> Result<Self, EllipsoidErrors> {
        check_resolution(stacks, slices)?;
        let mut generator = Self {
            center,
            radii,
            stacks,
            slices,
            mesh: Mesh::new(stacks, slices),
        };
        generator.fill_mesh();
        Ok(generator)
    }

    pub fn set_center(&mut self, center: Point3D) {
        self.center = center;
        self.fill_mesh();
    }

    pub fn set_radii(&mut self, radii: Point3D) {
        self.radii = radii;
        self.fill_mesh();
    }

    pub fn set_stacks(&mut self, stacks: usize) -> Result<(), EllipsoidErrors> {
        self.set_resolution(stacks, self.slices)
    }

    pub fn set_slices(&mut self, slices: usize) -> Result<(), EllipsoidErrors> {
        self.set_resolution(self.stacks, slices)
    }

    /// Changes both resolutions with a single reallocation. Nothing changes if
    /// either value is rejected.
    pub fn set_resolution(&mut self, stacks: usize, slices: usize) -> Result<(), EllipsoidErrors> {
        if let Err(e) = check_resolution(stacks, slices) {
            log::warn!("rejected ellipsoid resolution change: {e}");
            return Err(e);
        }
        self.stacks = stacks;
        self.slices = slices;
        self.init_mesh();
        Ok(())
    }

    pub fn stack_count(&self) -> usize {
        self.stacks
    }

    pub fn slice_count(&self) -> usize {
        self.slices
    }

    pub fn center(&self) -> Point3D {
        self.center
    }

    pub fn radii(&self) -> Point3D {
        self.radii
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    fn init_mesh(&mut self) {
        log::debug!(
            "allocating {}x{} ellipsoid mesh",
            self.stacks,
            self.slices
        );
        self.mesh = Mesh::new(self.stacks, self.slices);
        self.fill_mesh();
    }

    fn fill_mesh(&mut self) {
        log::trace!(
            "filling ellipsoid mesh: center {:?}, radii {:?}",
            self.center,
            self.radii
        );
        let phi_step = PI / (self.stacks - 1) as f64;
        let theta_step = 2.0 * PI / (self.slices - 1) as f64;

        for i in 0..self.stacks {
            let phi = -FRAC_PI_2 + i as f64 * phi_step;
            let (sin_phi, cos_phi) = phi.sin_cos();

            for j in 0..self.slices {
                let theta = -PI + j as f64 * theta_step;
                let (sin_theta, cos_theta) = theta.sin_cos();

                let direction = vec3(
                    (cos_phi * cos_theta) as f32,
                    (cos_phi * sin_theta) as f32,
                    sin_phi as f32,
                );
                let position = self.center + self.radii * direction;
                self.mesh
                    .set(i, j, position, direction.normalize());
            }
        }
    }
}
