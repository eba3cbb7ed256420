use glutin::{Api, ContextBuilder, GlRequest, NotCurrent, PossiblyCurrent, WindowedContext};
use log::{debug, info};
use std::any::Any;
use std::panic::{self, UnwindSafe};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::desktop::EventLoopExtDesktop;
use winit::window::{WindowBuilder, WindowId};

use super::{ContextHint, Platform};
use crate::config::GlProfile;
use crate::error::{Error, Result};

/// `winit` windows with `glutin` GL contexts and `glow` entry points.
///
/// The event loop connects to the display server, so it is opened with the
/// first window rather than at `init`.
pub struct GlutinPlatform {
    event_loop: Option<EventLoop<()>>,
    version: (u8, u8),
    profile: GlProfile,
}

enum Context {
    NotCurrent(WindowedContext<NotCurrent>),
    Current(WindowedContext<PossiblyCurrent>),
}

pub struct GlutinWindow {
    id: WindowId,
    context: Option<Context>,
    should_close: bool,
}

impl GlutinWindow {
    fn current(&self) -> Result<&WindowedContext<PossiblyCurrent>> {
        match &self.context {
            Some(Context::Current(context)) => Ok(context),
            _ => Err(Error::Context("context is not current".to_owned())),
        }
    }
}

impl GlutinPlatform {
    pub fn init() -> Self {
        GlutinPlatform {
            event_loop: None,
            version: (3, 3),
            profile: GlProfile::Core,
        }
    }

    fn event_loop(&mut self) -> Result<&EventLoop<()>> {
        if self.event_loop.is_none() {
            debug!("creating event loop");
            self.event_loop = Some(open_backend(EventLoop::new)?);
        }
        match &self.event_loop {
            Some(event_loop) => Ok(event_loop),
            None => Err(Error::WindowCreation("event loop unavailable".to_owned())),
        }
    }
}

/// Runs a backend constructor that reports a missing display server by
/// panicking, turning the panic into `Error::WindowCreation`.
fn open_backend<T, F>(open: F) -> Result<T>
where
    F: FnOnce() -> T + UnwindSafe,
{
    panic::catch_unwind(open).map_err(|payload| Error::WindowCreation(panic_message(&*payload)))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "windowing backend failed to initialize".to_owned()
    }
}

impl Platform for GlutinPlatform {
    type Window = GlutinWindow;
    type Graphics = glow::Context;

    fn hint(&mut self, hint: ContextHint) {
        match hint {
            ContextHint::Version { major, minor } => self.version = (major, minor),
            ContextHint::Profile(profile) => self.profile = profile,
        }
    }

    fn create_window(&mut self, width: u32, height: u32, title: &str) -> Result<GlutinWindow> {
        let wb = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(LogicalSize::new(f64::from(width), f64::from(height)));
        let profile = match self.profile {
            GlProfile::Core => glutin::GlProfile::Core,
        };
        let version = self.version;

        let context = ContextBuilder::new()
            .with_gl(GlRequest::Specific(Api::OpenGl, version))
            .with_gl_profile(profile)
            .build_windowed(wb, self.event_loop()?)
            .map_err(|err| Error::WindowCreation(format!("{:?}", err)))?;
        info!(
            "created {}x{} window \"{}\" with GL {}.{} {:?}",
            width, height, title, self.version.0, self.version.1, self.profile
        );

        Ok(GlutinWindow {
            id: context.window().id(),
            context: Some(Context::NotCurrent(context)),
            should_close: false,
        })
    }

    fn make_context_current(&mut self, window: &mut GlutinWindow) -> Result<()> {
        let made_current = match window.context.take() {
            Some(Context::NotCurrent(context)) => unsafe { context.make_current() }
                .map_err(|(context, err)| (Context::NotCurrent(context), err)),
            Some(Context::Current(context)) => unsafe { context.make_current() }
                .map_err(|(context, err)| (Context::Current(context), err)),
            None => return Err(Error::Context("window has no context".to_owned())),
        };

        match made_current {
            Ok(context) => {
                window.context = Some(Context::Current(context));
                Ok(())
            }
            Err((context, err)) => {
                window.context = Some(context);
                Err(Error::Context(format!("{:?}", err)))
            }
        }
    }

    fn load_graphics(&mut self, window: &GlutinWindow) -> Result<glow::Context> {
        let context = window.current()?;
        let gl = unsafe {
            glow::Context::from_loader_function(|symbol| context.get_proc_address(symbol) as *const _)
        };

        Ok(gl)
    }

    fn poll_events(&mut self, window: &mut GlutinWindow) {
        let event_loop = match &mut self.event_loop {
            Some(event_loop) => event_loop,
            None => return,
        };
        let GlutinWindow {
            id, should_close, ..
        } = window;

        event_loop.run_return(|event, _, control_flow| {
            *control_flow = ControlFlow::Poll;
            match event {
                Event::WindowEvent {
                    window_id,
                    event: WindowEvent::CloseRequested,
                } if window_id == *id => {
                    debug!("close requested");
                    *should_close = true;
                }
                Event::MainEventsCleared => *control_flow = ControlFlow::Exit,
                _ => {}
            }
        });
    }

    fn should_close(&self, window: &GlutinWindow) -> bool {
        window.should_close
    }

    fn swap_buffers(&mut self, window: &GlutinWindow) -> Result<()> {
        window
            .current()?
            .swap_buffers()
            .map_err(|err| Error::Present(format!("{:?}", err)))
    }

    fn destroy_window(&mut self, window: GlutinWindow) {
        debug!("destroying window");
        drop(window);
    }

    fn terminate(self) {
        if let Some(event_loop) = self.event_loop {
            debug!("dropping event loop");
            drop(event_loop);
        }
    }
}
