mod app;
mod config;
mod error;
#[cfg(test)]
mod mock;
mod platform;
mod renderer;

use config::Config;
use platform::GlutinPlatform;

use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let platform = GlutinPlatform::init();
    let status = app::run(platform, &Config::default());
    process::exit(status);
}
