use log::debug;

use super::context::{BufferTarget, GraphicsContext};
use crate::error::Result;

/// A GPU buffer filled once at creation with static usage.
pub struct Buffer<'a, G: GraphicsContext> {
    gl: &'a G,
    pub buf: G::Buffer,
    pub target: BufferTarget,
}

impl<'a, G: GraphicsContext> Buffer<'a, G> {
    /// Creates the buffer and uploads `content`, leaving it bound to `target`.
    pub fn new(gl: &'a G, target: BufferTarget, content: &[u8]) -> Result<Self> {
        assert_ne!(content.len(), 0);

        let buf = gl.create_buffer()?;
        gl.bind_buffer(target, Some(buf));
        gl.buffer_data(target, content);
        debug!("uploaded {} bytes to {:?} buffer {:?}", content.len(), target, buf);

        Ok(Buffer {
            gl,
            buf,
            target,
        })
    }
}

impl<'a, G: GraphicsContext> Drop for Buffer<'a, G> {
    fn drop(&mut self) {
        debug!("deleting {:?} buffer {:?}", self.target, self.buf);
        self.gl.delete_buffer(self.buf);
    }
}
