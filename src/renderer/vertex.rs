use bytemuck::{Pod, Zeroable};

// `f32::sqrt` is not const.
const SQRT_3: f32 = 1.732_050_8;

#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vertex {
    pub position: [f32; 3],
}

/// Number of `f32` components per vertex, bound to attribute 0.
pub const COMPONENTS: i32 = 3;

/// An equilateral triangle centered on the origin, plus the midpoints of its
/// three edges.
pub const VERTICES: [Vertex; 6] = [
    // lower left
    Vertex {
        position: [-0.5, -0.5 * SQRT_3 / 3.0, 0.0],
    },
    // lower right
    Vertex {
        position: [0.5, -0.5 * SQRT_3 / 3.0, 0.0],
    },
    // upper corner
    Vertex {
        position: [0.0, 0.5 * SQRT_3 * 2.0 / 3.0, 0.0],
    },
    // inner left
    Vertex {
        position: [-0.5 / 2.0, 0.5 * SQRT_3 / 6.0, 0.0],
    },
    // inner right
    Vertex {
        position: [0.5 / 2.0, 0.5 * SQRT_3 / 6.0, 0.0],
    },
    // inner down
    Vertex {
        position: [0.0, -0.5 * SQRT_3 / 3.0, 0.0],
    },
];

/// Three corner triangles; the middle one is left empty.
pub const INDICES: [u32; 9] = [
    0, 3, 5, // lower left
    3, 2, 4, // upper
    5, 4, 1, // lower right
];

pub const INDEX_COUNT: i32 = INDICES.len() as i32;
