/// OpenGL profile requested from the context creator. Only the core
/// profile's entry points are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlProfile {
    Core,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { r, g, b, a }
    }
}

/// Background the color buffer is cleared to, including the eager clear
/// before the first frame.
pub const CLEAR_COLOR: Color = Color::new(0.07, 0.13, 0.17, 1.0);

/// Constant `triangle.frag` writes; the shader text is checked against it.
#[cfg(test)]
pub const TRIANGLE_COLOR: Color = Color::new(0.8, 0.3, 0.02, 1.0);

#[derive(Debug, Clone, PartialEq)]
pub struct ContextConfig {
    pub major: u8,
    pub minor: u8,
    pub profile: GlProfile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub context: ContextConfig,
    pub window: WindowConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            context: ContextConfig {
                major: 3,
                minor: 3,
                profile: GlProfile::Core,
            },
            window: WindowConfig {
                width: 800,
                height: 800,
                title: "openGL".to_owned(),
            },
        }
    }
}
