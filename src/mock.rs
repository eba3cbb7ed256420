//! Recording stand-ins for the windowing library and the GL driver.
//!
//! Both halves append to one shared [`CallLog`], so a test sees platform and
//! driver calls interleaved in the order they happened.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::Color;
use crate::error::{Error, Result};
use crate::platform::{ContextHint, Platform};
use crate::renderer::{BufferTarget, GraphicsContext, ShaderStage};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    // windowing library
    Hint(ContextHint),
    CreateWindow(u32, u32, String),
    MakeContextCurrent,
    LoadGraphics,
    PollEvents,
    SwapBuffers,
    DestroyWindow,
    Terminate,
    // driver
    Viewport(i32, i32, i32, i32),
    CreateShader(ShaderStage, u32),
    ShaderSource(u32, String),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    LinkProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    CreateBuffer(u32),
    BindBuffer(BufferTarget, Option<u32>),
    BufferData(BufferTarget, Vec<u8>),
    DeleteBuffer(u32),
    VertexAttribPointer {
        index: u32,
        size: i32,
        stride: i32,
        offset: i32,
    },
    EnableVertexAttribArray(u32),
    ClearColor(Color),
    Clear,
    DrawTriangles {
        count: i32,
        offset: i32,
    },
}

impl Call {
    pub fn is_driver_call(&self) -> bool {
        match self {
            Call::Hint(_)
            | Call::CreateWindow(..)
            | Call::MakeContextCurrent
            | Call::LoadGraphics
            | Call::PollEvents
            | Call::SwapBuffers
            | Call::DestroyWindow
            | Call::Terminate => false,
            _ => true,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CallLog(Rc<RefCell<Vec<Call>>>);

impl CallLog {
    pub fn push(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    pub fn borrow(&self) -> std::cell::Ref<'_, Vec<Call>> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, Vec<Call>> {
        self.0.borrow_mut()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.0.borrow().iter().filter(|c| pred(c)).count()
    }
}

/// Fake driver handing out sequential object names starting at 1.
pub struct MockGraphics {
    log: CallLog,
    next_name: Cell<u32>,
    version: (u32, u32),
    failing_stage: Option<ShaderStage>,
    failing_link: bool,
    stages: RefCell<Vec<(u32, ShaderStage)>>,
}

impl MockGraphics {
    pub fn new(log: CallLog) -> Self {
        MockGraphics {
            log,
            next_name: Cell::new(1),
            version: (3, 3),
            failing_stage: None,
            failing_link: false,
            stages: RefCell::new(Vec::new()),
        }
    }

    pub fn with_version(mut self, major: u32, minor: u32) -> Self {
        self.version = (major, minor);
        self
    }

    pub fn fail_compile(mut self, stage: ShaderStage) -> Self {
        self.failing_stage = Some(stage);
        self
    }

    pub fn fail_link(mut self) -> Self {
        self.failing_link = true;
        self
    }

    fn name(&self) -> u32 {
        let name = self.next_name.get();
        self.next_name.set(name + 1);
        name
    }
}

impl GraphicsContext for MockGraphics {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;

    fn version(&self) -> (u32, u32) {
        self.version
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.log.push(Call::Viewport(x, y, width, height));
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<u32> {
        let name = self.name();
        self.stages.borrow_mut().push((name, stage));
        self.log.push(Call::CreateShader(stage, name));
        Ok(name)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.log.push(Call::ShaderSource(shader, source.to_owned()));
    }

    fn compile_shader(&self, shader: u32) {
        self.log.push(Call::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> std::result::Result<(), String> {
        let stage = self
            .stages
            .borrow()
            .iter()
            .find(|(name, _)| *name == shader)
            .map(|(_, stage)| *stage);
        if stage.is_some() && stage == self.failing_stage {
            Err(format!("0:1: error in {:?} stage", stage))
        } else {
            Ok(())
        }
    }

    fn delete_shader(&self, shader: u32) {
        self.log.push(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32> {
        let name = self.name();
        self.log.push(Call::CreateProgram(name));
        Ok(name)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.log.push(Call::AttachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        self.log.push(Call::LinkProgram(program));
    }

    fn program_link_status(&self, _program: u32) -> std::result::Result<(), String> {
        if self.failing_link {
            Err("link error: no output written".to_owned())
        } else {
            Ok(())
        }
    }

    fn use_program(&self, program: Option<u32>) {
        self.log.push(Call::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.log.push(Call::DeleteProgram(program));
    }

    fn create_vertex_array(&self) -> Result<u32> {
        let name = self.name();
        self.log.push(Call::CreateVertexArray(name));
        Ok(name)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.log.push(Call::BindVertexArray(vertex_array));
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.log.push(Call::DeleteVertexArray(vertex_array));
    }

    fn create_buffer(&self) -> Result<u32> {
        let name = self.name();
        self.log.push(Call::CreateBuffer(name));
        Ok(name)
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<u32>) {
        self.log.push(Call::BindBuffer(target, buffer));
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8]) {
        self.log.push(Call::BufferData(target, data.to_vec()));
    }

    fn delete_buffer(&self, buffer: u32) {
        self.log.push(Call::DeleteBuffer(buffer));
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32) {
        self.log.push(Call::VertexAttribPointer {
            index,
            size,
            stride,
            offset,
        });
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.log.push(Call::EnableVertexAttribArray(index));
    }

    fn clear_color(&self, color: Color) {
        self.log.push(Call::ClearColor(color));
    }

    fn clear_color_buffer(&self) {
        self.log.push(Call::Clear);
    }

    fn draw_triangles(&self, count: i32, offset: i32) {
        self.log.push(Call::DrawTriangles { count, offset });
    }
}

/// Fake windowing library. The window's close flag is raised by the
/// `close_after`-th poll.
pub struct MockPlatform {
    log: CallLog,
    close_after: usize,
    window_fails: bool,
    graphics: Option<MockGraphics>,
}

pub struct MockWindow {
    polls: usize,
}

impl MockPlatform {
    pub fn new(log: CallLog, close_after: usize) -> Self {
        let graphics = MockGraphics::new(log.clone());
        MockPlatform {
            log,
            close_after,
            window_fails: false,
            graphics: Some(graphics),
        }
    }

    pub fn failing_window(mut self) -> Self {
        self.window_fails = true;
        self
    }

    pub fn with_graphics(mut self, graphics: MockGraphics) -> Self {
        self.graphics = Some(graphics);
        self
    }
}

impl Platform for MockPlatform {
    type Window = MockWindow;
    type Graphics = MockGraphics;

    fn hint(&mut self, hint: ContextHint) {
        self.log.push(Call::Hint(hint));
    }

    fn create_window(&mut self, width: u32, height: u32, title: &str) -> Result<MockWindow> {
        self.log
            .push(Call::CreateWindow(width, height, title.to_owned()));
        if self.window_fails {
            Err(Error::WindowCreation("no display".to_owned()))
        } else {
            Ok(MockWindow { polls: 0 })
        }
    }

    fn make_context_current(&mut self, _window: &mut MockWindow) -> Result<()> {
        self.log.push(Call::MakeContextCurrent);
        Ok(())
    }

    fn load_graphics(&mut self, _window: &MockWindow) -> Result<MockGraphics> {
        self.log.push(Call::LoadGraphics);
        self.graphics
            .take()
            .ok_or_else(|| Error::Context("graphics already loaded".to_owned()))
    }

    fn poll_events(&mut self, window: &mut MockWindow) {
        self.log.push(Call::PollEvents);
        window.polls += 1;
    }

    fn should_close(&self, window: &MockWindow) -> bool {
        window.polls >= self.close_after
    }

    fn swap_buffers(&mut self, _window: &MockWindow) -> Result<()> {
        self.log.push(Call::SwapBuffers);
        Ok(())
    }

    fn destroy_window(&mut self, _window: MockWindow) {
        self.log.push(Call::DestroyWindow);
    }

    fn terminate(self) {
        self.log.push(Call::Terminate);
    }
}
