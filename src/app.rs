use fps_counter::FPSCounter;
use log::{error, info, trace};

use crate::config::{Config, ContextConfig};
use crate::error::{Error, Result};
use crate::platform::{ContextHint, Platform};
use crate::renderer::{GraphicsContext, Renderer};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = -1;

/// Opens the window, draws until it is asked to close and releases
/// everything again. Returns the process exit status.
pub fn run<P: Platform>(mut platform: P, config: &Config) -> i32 {
    platform.hint(ContextHint::Version {
        major: config.context.major,
        minor: config.context.minor,
    });
    platform.hint(ContextHint::Profile(config.context.profile));

    let (width, height) = (config.window.width, config.window.height);
    let mut window = match platform.create_window(width, height, &config.window.title) {
        Ok(window) => window,
        Err(err) => {
            println!("Failed to create window");
            error!("{}", err);
            platform.terminate();
            return EXIT_FAILURE;
        }
    };

    let status = match render(&mut platform, &mut window, config) {
        Ok(frames) => {
            info!("window closed after {} frames", frames);
            EXIT_SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            EXIT_FAILURE
        }
    };

    platform.destroy_window(window);
    platform.terminate();
    status
}

/// Everything that needs a current context. GPU objects are released when
/// the renderer goes out of scope, before the window is destroyed.
fn render<P: Platform>(platform: &mut P, window: &mut P::Window, config: &Config) -> Result<u64> {
    platform.make_context_current(window)?;
    let gl = platform.load_graphics(window)?;
    check_version(&gl, &config.context)?;
    let renderer = Renderer::new(&gl, config)?;

    renderer.clear();
    platform.swap_buffers(window)?;

    let mut fps_counter = FPSCounter::new();
    let mut frames = 0;
    while !platform.should_close(window) {
        platform.poll_events(window);

        renderer.draw_frame();
        platform.swap_buffers(window)?;

        frames += 1;
        trace!("frame {} ({} fps)", frames, fps_counter.tick());
    }

    Ok(frames)
}

fn check_version<G: GraphicsContext>(gl: &G, context: &ContextConfig) -> Result<()> {
    let (found_major, found_minor) = gl.version();
    let (major, minor) = (u32::from(context.major), u32::from(context.minor));
    if (found_major, found_minor) < (major, minor) {
        return Err(Error::Loader {
            major,
            minor,
            found_major,
            found_minor,
        });
    }
    info!("loaded GL {}.{} entry points", found_major, found_minor);
    Ok(())
}
