use log::debug;

use super::context::{GraphicsContext, ShaderStage};
use crate::error::{Error, Result};

/// Passes `aPos` through unchanged as the clip-space position with `w = 1`.
pub const VERTEX_SHADER: &str = include_str!("../data/triangle.vert");
/// Writes `TRIANGLE_COLOR` for every fragment.
pub const FRAGMENT_SHADER: &str = include_str!("../data/triangle.frag");

/// A linked vertex + fragment program.
pub struct ShaderProgram<'a, G: GraphicsContext> {
    gl: &'a G,
    pub program: G::Program,
}

impl<'a, G: GraphicsContext> ShaderProgram<'a, G> {
    /// Compiles both stages, links them and releases the stage objects, which
    /// are not needed once linked.
    pub fn new(gl: &'a G, vs_source: &str, fs_source: &str) -> Result<Self> {
        let vs = Self::compile(gl, ShaderStage::Vertex, vs_source)?;
        let fs = match Self::compile(gl, ShaderStage::Fragment, fs_source) {
            Ok(fs) => fs,
            Err(err) => {
                gl.delete_shader(vs);
                return Err(err);
            }
        };

        let linked = Self::link(gl, vs, fs);
        gl.delete_shader(vs);
        gl.delete_shader(fs);
        let program = linked?;
        debug!("linked shader program {:?}", program);

        Ok(ShaderProgram { gl, program })
    }

    pub fn bind(&self) {
        self.gl.use_program(Some(self.program));
    }

    fn compile(gl: &G, stage: ShaderStage, source: &str) -> Result<G::Shader> {
        let shader = gl.create_shader(stage)?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
        if let Err(log) = gl.shader_compile_status(shader) {
            gl.delete_shader(shader);
            return Err(Error::ShaderCompile { stage, log });
        }
        Ok(shader)
    }

    fn link(gl: &G, vs: G::Shader, fs: G::Shader) -> Result<G::Program> {
        let program = gl.create_program()?;
        gl.attach_shader(program, vs);
        gl.attach_shader(program, fs);
        gl.link_program(program);
        if let Err(log) = gl.program_link_status(program) {
            gl.delete_program(program);
            return Err(Error::ProgramLink { log });
        }
        Ok(program)
    }
}

impl<'a, G: GraphicsContext> Drop for ShaderProgram<'a, G> {
    fn drop(&mut self) {
        debug!("deleting shader program {:?}", self.program);
        self.gl.delete_program(self.program);
    }
}
