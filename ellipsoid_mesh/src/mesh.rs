use crate::vertex::Vertex;
use glam::Vec3;

/// A location or direction in 3D space.
pub type Point3D = Vec3;

/// Rectangular grid of vertex positions and normals indexed by (stack, slice).
///
/// Cells are stored row-major: all slices of stack 0, then stack 1, and so on.
/// The grid shape is fixed at construction; resizing means building a new
/// `Mesh`.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    stacks: usize,
    slices: usize,
    vertices: Vec<Point3D>,
    normals: Vec<Point3D>,
}

impl Mesh {
    /// Allocates a zeroed grid with `stacks` rows and `slices` columns.
    pub fn new(stacks: usize, slices: usize) -> Self {
        let len = stacks * slices;
        Self {
            stacks,
            slices,
            vertices: vec![Vec3::ZERO; len],
            normals: vec![Vec3::ZERO; len],
        }
    }

    pub fn stack_count(&self) -> usize {
        self.stacks
    }

    pub fn slice_count(&self) -> usize {
        self.slices
    }

    /// Number of cells in the grid.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn index(&self, stack: usize, slice: usize) -> usize {
        assert!(
            stack < self.stacks && slice < self.slices,
            "cell ({stack}, {slice}) is outside a {}x{} mesh",
            self.stacks,
            self.slices
        );
        stack * self.slices + slice
    }

    fn checked_index(&self, stack: usize, slice: usize) -> Option<usize> {
        (stack < self.stacks && slice < self.slices).then(|| stack * self.slices + slice)
    }

    /// Position of a cell. Panics if the cell is outside the grid.
    pub fn vertex(&self, stack: usize, slice: usize) -> Point3D {
        self.vertices[self.index(stack, slice)]
    }

    /// Normal of a cell. Panics if the cell is outside the grid.
    pub fn normal(&self, stack: usize, slice: usize) -> Point3D {
        self.normals[self.index(stack, slice)]
    }

    /// Position and normal of a cell, or `None` if it is outside the grid.
    pub fn get(&self, stack: usize, slice: usize) -> Option<(Point3D, Point3D)> {
        self.checked_index(stack, slice)
            .map(|index| (self.vertices[index], self.normals[index]))
    }

    pub fn vertex_mut(&mut self, stack: usize, slice: usize) -> &mut Point3D {
        let index = self.index(stack, slice);
        &mut self.vertices[index]
    }

    pub fn normal_mut(&mut self, stack: usize, slice: usize) -> &mut Point3D {
        let index = self.index(stack, slice);
        &mut self.normals[index]
    }

    pub fn set(&mut self, stack: usize, slice: usize, position: Point3D, normal: Point3D) {
        let index = self.index(stack, slice);
        self.vertices[index] = position;
        self.normals[index] = normal;
    }

    /// All positions in row-major order.
    pub fn vertices(&self) -> &[Point3D] {
        &self.vertices
    }

    /// All normals in row-major order.
    pub fn normals(&self) -> &[Point3D] {
        &self.normals
    }

    pub fn vertex_row(&self, stack: usize) -> &[Point3D] {
        let start = self.index(stack, 0);
        &self.vertices[start..start + self.slices]
    }

    pub fn normal_row(&self, stack: usize) -> &[Point3D] {
        let start = self.index(stack, 0);
        &self.normals[start..start + self.slices]
    }

    /// Interleaves positions and normals into a vertex buffer, row-major.
    pub fn to_vertices(&self) -> Vec<Vertex> {
        self.vertices
            .iter()
            .zip(&self.normals)
            .map(|(&pos, &normal)| Vertex { pos, normal })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;

    #[test]
    fn test_mesh_new_is_zeroed() {
        let mesh = Mesh::new(3, 5);
        assert_eq!(mesh.stack_count(), 3);
        assert_eq!(mesh.slice_count(), 5);
        assert_eq!(mesh.len(), 15);
        assert!(!mesh.is_empty());
        assert!(mesh.vertices().iter().all(|v| *v == Vec3::ZERO));
        assert!(mesh.normals().iter().all(|n| *n == Vec3::ZERO));
    }

    #[test]
    fn test_mesh_is_row_major() {
        let mut mesh = Mesh::new(2, 3);
        mesh.set(1, 2, vec3(1.0, 2.0, 3.0), Vec3::Z);
        *mesh.vertex_mut(0, 1) = vec3(4.0, 5.0, 6.0);
        *mesh.normal_mut(0, 1) = Vec3::X;

        assert_eq!(mesh.vertices()[5], vec3(1.0, 2.0, 3.0));
        assert_eq!(mesh.normals()[5], Vec3::Z);
        assert_eq!(mesh.vertices()[1], vec3(4.0, 5.0, 6.0));
        assert_eq!(mesh.vertex_row(1)[2], vec3(1.0, 2.0, 3.0));
        assert_eq!(mesh.normal_row(0)[1], Vec3::X);
        assert_eq!(mesh.vertex(1, 2), vec3(1.0, 2.0, 3.0));
        assert_eq!(mesh.normal(0, 1), Vec3::X);
    }

    #[test]
    fn test_mesh_get_out_of_range() {
        let mesh = Mesh::new(2, 3);
        assert!(mesh.get(1, 2).is_some());
        assert!(mesh.get(2, 0).is_none());
        assert!(mesh.get(0, 3).is_none());
    }

    #[test]
    #[should_panic]
    fn test_mesh_vertex_out_of_range_panics() {
        let mesh = Mesh::new(2, 3);
        // (0, 3) would alias (1, 0) without the bounds check
        mesh.vertex(0, 3);
    }

    #[test]
    fn test_mesh_to_vertices() {
        let mut mesh = Mesh::new(2, 2);
        mesh.set(1, 0, vec3(1.0, 0.0, 0.0), Vec3::Y);

        let vertices = mesh.to_vertices();
        assert_eq!(vertices.len(), 4);
        assert_eq!(vertices[2].pos, vec3(1.0, 0.0, 0.0));
        assert_eq!(vertices[2].normal, Vec3::Y);
    }
}
