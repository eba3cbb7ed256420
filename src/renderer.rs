use log::debug;

mod buffer;
mod context;
mod gl;
mod mesh;
mod pipeline;
mod vertex;

#[cfg(test)]
pub use context::BufferTarget;
pub use context::{GraphicsContext, ShaderStage};
pub use pipeline::{FRAGMENT_SHADER, VERTEX_SHADER};
pub use vertex::{INDEX_COUNT, INDICES, VERTICES};

use crate::config::{Color, Config, CLEAR_COLOR};
use crate::error::Result;
use mesh::Mesh;
use pipeline::ShaderProgram;

/// Everything on the GPU side of one frame: the linked program and the mesh
/// it draws.
///
/// Dropping the renderer deletes the vertex array, the vertex buffer, the
/// index buffer and then the program, in that order. Fields drop in
/// declaration order, so `mesh` must stay ahead of `pipeline`.
pub struct Renderer<'a, G: GraphicsContext> {
    gl: &'a G,
    clear_color: Color,
    mesh: Mesh<'a, G>,
    pipeline: ShaderProgram<'a, G>,
}

impl<'a, G> Renderer<'a, G>
where
    G: GraphicsContext,
{
    pub fn new(gl: &'a G, config: &Config) -> Result<Self> {
        let (width, height) = (config.window.width as i32, config.window.height as i32);
        gl.viewport(0, 0, width, height);
        debug!("viewport set to {}x{}", width, height);

        let pipeline = ShaderProgram::new(gl, VERTEX_SHADER, FRAGMENT_SHADER)?;
        let mesh = Mesh::new(gl, &VERTICES, &INDICES)?;

        Ok(Renderer {
            gl,
            clear_color: CLEAR_COLOR,
            mesh,
            pipeline,
        })
    }

    /// Clears the color buffer to the background color.
    pub fn clear(&self) {
        self.gl.clear_color(self.clear_color);
        self.gl.clear_color_buffer();
    }

    /// Records one frame: clear, bind program and mesh, draw every index.
    /// Presenting is left to the caller.
    pub fn draw_frame(&self) {
        self.clear();
        self.pipeline.bind();
        self.mesh.bind();
        self.gl.draw_triangles(INDEX_COUNT, 0);
    }
}
