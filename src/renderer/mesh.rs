use log::debug;
use std::mem;

use super::buffer::Buffer;
use super::context::{BufferTarget, GraphicsContext};
use super::vertex::{Vertex, COMPONENTS};
use crate::error::Result;

/// Attribute slot the vertex stage reads positions from.
pub const POSITION_ATTRIBUTE: u32 = 0;

/// Static indexed geometry: the vertex-layout binding plus the vertex and
/// index buffers it references.
///
/// `Drop` deletes the vertex array first; the buffers follow in field order.
pub struct Mesh<'a, G: GraphicsContext> {
    gl: &'a G,
    pub vertex_array: G::VertexArray,
    vertex_buffer: Buffer<'a, G>,
    index_buffer: Buffer<'a, G>,
}

impl<'a, G: GraphicsContext> Mesh<'a, G> {
    pub fn new(gl: &'a G, vertices: &[Vertex], indices: &[u32]) -> Result<Self> {
        let vertex_array = gl.create_vertex_array()?;
        debug!("created vertex array {:?}", vertex_array);

        // Releases the array if either upload below fails.
        let guard = VertexArrayGuard { gl, vertex_array };

        gl.bind_vertex_array(Some(vertex_array));
        let vertex_buffer = Buffer::new(gl, BufferTarget::Array, bytemuck::cast_slice(vertices))?;
        let index_buffer =
            Buffer::new(gl, BufferTarget::ElementArray, bytemuck::cast_slice(indices))?;

        gl.vertex_attrib_pointer_f32(
            POSITION_ATTRIBUTE,
            COMPONENTS,
            mem::size_of::<Vertex>() as i32,
            0,
        );
        gl.enable_vertex_attrib_array(POSITION_ATTRIBUTE);

        gl.bind_buffer(BufferTarget::Array, None);
        gl.bind_vertex_array(None);
        gl.bind_buffer(BufferTarget::ElementArray, None);

        mem::forget(guard);
        Ok(Mesh {
            gl,
            vertex_array,
            vertex_buffer,
            index_buffer,
        })
    }

    pub fn bind(&self) {
        self.gl.bind_vertex_array(Some(self.vertex_array));
    }
}

impl<'a, G: GraphicsContext> Drop for Mesh<'a, G> {
    fn drop(&mut self) {
        debug!(
            "deleting vertex array {:?} ahead of buffers {:?} and {:?}",
            self.vertex_array, self.vertex_buffer.buf, self.index_buffer.buf
        );
        self.gl.delete_vertex_array(self.vertex_array);
    }
}

struct VertexArrayGuard<'a, G: GraphicsContext> {
    gl: &'a G,
    vertex_array: G::VertexArray,
}

impl<'a, G: GraphicsContext> Drop for VertexArrayGuard<'a, G> {
    fn drop(&mut self) {
        self.gl.delete_vertex_array(self.vertex_array);
    }
}
