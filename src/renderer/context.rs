use crate::config::Color;
use crate::error::Result;
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferTarget {
    /// Per-vertex attribute data.
    Array,
    /// Triangle indices, captured by the bound vertex array.
    ElementArray,
}

/// Driver operations the renderer issues.
///
/// Every method assumes the implementor's context is current on the calling
/// thread. Handles are plain copyable names; releasing them is the caller's
/// job (see the `Drop` impls in `buffer`, `mesh` and `pipeline`).
pub trait GraphicsContext {
    type Shader: Copy + Debug;
    type Program: Copy + Debug;
    type Buffer: Copy + Debug;
    type VertexArray: Copy + Debug;

    /// Major/minor version of the loaded entry points.
    fn version(&self) -> (u32, u32);

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    /// `Err` holds the driver's info log.
    fn shader_compile_status(&self, shader: Self::Shader) -> std::result::Result<(), String>;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    /// `Err` holds the driver's info log.
    fn program_link_status(&self, program: Self::Program) -> std::result::Result<(), String>;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    fn create_vertex_array(&self) -> Result<Self::VertexArray>;
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);

    fn create_buffer(&self) -> Result<Self::Buffer>;
    fn bind_buffer(&self, target: BufferTarget, buffer: Option<Self::Buffer>);
    /// Uploads `data` once with static usage.
    fn buffer_data(&self, target: BufferTarget, data: &[u8]);
    fn delete_buffer(&self, buffer: Self::Buffer);

    /// Describes `size` tightly packed `f32` components read from the bound
    /// array buffer. `stride` and `offset` are in bytes.
    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32);
    fn enable_vertex_attrib_array(&self, index: u32);

    fn clear_color(&self, color: Color);
    fn clear_color_buffer(&self);

    /// Indexed triangle-list draw over `u32` indices from the bound element
    /// array buffer.
    fn draw_triangles(&self, count: i32, offset: i32);
}
