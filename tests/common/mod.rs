// Recording stand-ins for the GPU and the canvas, shared by the host tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use laserflow::{GpuBackend, LaserFlowError, ShaderStage, Surface, SurfaceSize};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Compile(ShaderStage),
    Link,
    UseProgram(u32),
    Upload { attribute: String, floats: usize },
    Uniform { name: String, values: Vec<f32> },
    Viewport(SurfaceSize),
    Draw(i32),
    DeleteShader(u32),
    DeleteProgram(u32),
    DeleteBuffer(u32),
}

#[derive(Default)]
pub struct GpuLog {
    pub calls: Vec<Call>,
    pub created: Vec<u32>,
    pub live: HashSet<u32>,
    // per mock, like a real context's own object namespace
    next_id: u32,
}

impl GpuLog {
    pub fn draws(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Draw(_))).count()
    }

    pub fn uniform_writes(&self, name: &str) -> Vec<Vec<f32>> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Uniform { name: n, values } if n == name => Some(values.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_uniform(&self, name: &str) -> Option<Vec<f32>> {
        self.uniform_writes(name).pop()
    }
}

#[derive(Clone, Default)]
pub struct MockGpu {
    pub log: Rc<RefCell<GpuLog>>,
    pub fail_stage: Option<ShaderStage>,
    pub fail_link: bool,
}

impl MockGpu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_compile(stage: ShaderStage) -> Self {
        Self {
            fail_stage: Some(stage),
            ..Self::default()
        }
    }

    pub fn failing_link() -> Self {
        Self {
            fail_link: true,
            ..Self::default()
        }
    }

    fn create(&self) -> u32 {
        let mut log = self.log.borrow_mut();
        log.next_id += 1;
        let id = log.next_id;
        log.created.push(id);
        log.live.insert(id);
        id
    }

    fn release(&self, id: u32) {
        self.log.borrow_mut().live.remove(&id);
    }

    fn record(&self, call: Call) {
        self.log.borrow_mut().calls.push(call);
    }
}

#[derive(Debug)]
pub struct Handle(pub u32);

impl GpuBackend for MockGpu {
    type Shader = Handle;
    type Program = Handle;
    type Buffer = Handle;
    type Uniform = String;

    fn compile_shader(&self, stage: ShaderStage, _source: &str) -> laserflow::error::Result<Handle> {
        self.record(Call::Compile(stage));
        let id = self.create();
        if self.fail_stage == Some(stage) {
            self.release(id);
            return Err(LaserFlowError::ShaderCompile {
                stage,
                log: "ERROR: 0:1: syntax error".to_string(),
            });
        }
        Ok(Handle(id))
    }

    fn link_program(&self, _vertex: &Handle, _fragment: &Handle) -> laserflow::error::Result<Handle> {
        self.record(Call::Link);
        let id = self.create();
        if self.fail_link {
            self.release(id);
            return Err(LaserFlowError::ProgramLink("varying mismatch".to_string()));
        }
        Ok(Handle(id))
    }

    fn use_program(&self, program: &Handle) {
        self.record(Call::UseProgram(program.0));
    }

    fn upload_vertices(
        &self,
        _program: &Handle,
        attribute: &str,
        vertices: &[f32],
    ) -> laserflow::error::Result<Handle> {
        self.record(Call::Upload {
            attribute: attribute.to_string(),
            floats: vertices.len(),
        });
        Ok(Handle(self.create()))
    }

    fn uniform_location(&self, _program: &Handle, name: &str) -> Option<String> {
        Some(name.to_string())
    }

    fn uniform1f(&self, location: Option<&String>, x: f32) {
        if let Some(name) = location {
            self.record(Call::Uniform {
                name: name.clone(),
                values: vec![x],
            });
        }
    }

    fn uniform2f(&self, location: Option<&String>, x: f32, y: f32) {
        if let Some(name) = location {
            self.record(Call::Uniform {
                name: name.clone(),
                values: vec![x, y],
            });
        }
    }

    fn uniform3f(&self, location: Option<&String>, x: f32, y: f32, z: f32) {
        if let Some(name) = location {
            self.record(Call::Uniform {
                name: name.clone(),
                values: vec![x, y, z],
            });
        }
    }

    fn viewport(&self, size: SurfaceSize) {
        self.record(Call::Viewport(size));
    }

    fn draw_triangles(&self, vertex_count: i32) {
        self.record(Call::Draw(vertex_count));
    }

    fn delete_shader(&self, shader: &Handle) {
        self.record(Call::DeleteShader(shader.0));
        self.release(shader.0);
    }

    fn delete_program(&self, program: &Handle) {
        self.record(Call::DeleteProgram(program.0));
        self.release(program.0);
    }

    fn delete_buffer(&self, buffer: &Handle) {
        self.record(Call::DeleteBuffer(buffer.0));
        self.release(buffer.0);
    }
}

pub struct SurfaceState {
    pub css: Cell<(f64, f64)>,
    pub dpr: Cell<f64>,
    pub backing: Cell<SurfaceSize>,
    pub resizes: Cell<u32>,
}

/// A canvas stand-in. Starts with the HTML default 300x150 backing store.
#[derive(Clone)]
pub struct MockSurface(pub Rc<SurfaceState>);

impl MockSurface {
    pub fn new(css_width: f64, css_height: f64, dpr: f64) -> Self {
        Self(Rc::new(SurfaceState {
            css: Cell::new((css_width, css_height)),
            dpr: Cell::new(dpr),
            backing: Cell::new(SurfaceSize::new(300, 150)),
            resizes: Cell::new(0),
        }))
    }

    pub fn set_layout(&self, css_width: f64, css_height: f64) {
        self.0.css.set((css_width, css_height));
    }

    pub fn resizes(&self) -> u32 {
        self.0.resizes.get()
    }
}

impl Surface for MockSurface {
    fn layout_size(&self) -> (f64, f64) {
        self.0.css.get()
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.0.dpr.get()
    }

    fn backing_size(&self) -> SurfaceSize {
        self.0.backing.get()
    }

    fn set_backing_size(&self, size: SurfaceSize) {
        self.0.resizes.set(self.0.resizes.get() + 1);
        self.0.backing.set(size);
    }
}
