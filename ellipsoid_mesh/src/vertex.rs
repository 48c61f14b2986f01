use glam::Vec3;

/// One interleaved cell of the mesh, laid out for direct upload to a vertex
/// buffer.
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Default, PartialEq)]
#[repr(C)]
pub struct Vertex {
    pub pos: Vec3,
    pub normal: Vec3,
}

impl Vertex {
    pub const SIZE: usize = std::mem::size_of::<Self>();

    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}
