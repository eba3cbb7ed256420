use crate::renderer::ShaderStage;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create window: {0}")]
    WindowCreation(String),

    #[error("failed to make the GL context current: {0}")]
    Context(String),

    #[error("GL {major}.{minor} required, driver reports {found_major}.{found_minor}")]
    Loader {
        major: u32,
        minor: u32,
        found_major: u32,
        found_minor: u32,
    },

    #[error("{stage:?} shader failed to compile: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    #[error("shader program failed to link: {log}")]
    ProgramLink { log: String },

    #[error("could not create {kind}: {reason}")]
    Resource { kind: &'static str, reason: String },

    #[error("failed to present frame: {0}")]
    Present(String),
}
