use crate::config::GlProfile;
use crate::error::Result;
use crate::renderer::GraphicsContext;

mod native;

pub use native::GlutinPlatform;

/// Requests applied to the next window's GL context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextHint {
    Version { major: u8, minor: u8 },
    Profile(GlProfile),
}

/// Windowing and context library.
///
/// An initialized value stands for the library's process-wide state;
/// `terminate` consumes it. All calls happen on the thread that owns the
/// event loop.
pub trait Platform {
    type Window;
    type Graphics: GraphicsContext;

    fn hint(&mut self, hint: ContextHint);

    fn create_window(&mut self, width: u32, height: u32, title: &str) -> Result<Self::Window>;

    fn make_context_current(&mut self, window: &mut Self::Window) -> Result<()>;

    /// Loads the GL entry points for `window`'s current context.
    fn load_graphics(&mut self, window: &Self::Window) -> Result<Self::Graphics>;

    /// Handles pending events without waiting for new ones.
    fn poll_events(&mut self, window: &mut Self::Window);

    fn should_close(&self, window: &Self::Window) -> bool;

    fn swap_buffers(&mut self, window: &Self::Window) -> Result<()>;

    fn destroy_window(&mut self, window: Self::Window);

    fn terminate(self);
}
