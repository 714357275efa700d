use glow::{Context, HasContext, COLOR_BUFFER_BIT, DEBUG_OUTPUT, NO_ERROR, RENDERER, VERSION};
use sdl2::keyboard::Keycode;
use sdl2::video::GLContext;
use sdl2::{EventPump, Sdl, VideoSubsystem};

use std::marker::PhantomData;

pub use glam;
pub use glow;
pub use sdl2::{self, video::Window};

pub mod config;
mod error;
pub mod frame_loop;
pub mod input;
mod load_shaders;
pub mod logging;
pub mod triangle;
mod vertex_buffer;

pub use config::{GlProfile, GlVersion, WindowConfig};
pub use error::{BootstrapError, GlError, SceneError, ShaderError};
pub use frame_loop::{FrameLoop, FrameTarget, LoopState};
pub use input::{Action, InputEvent, KeyBindings};
pub use load_shaders::{compile_into, compile_shader, create_shader, ShaderStage};
pub use vertex_buffer::{VertexBuffer, POSITION_LOCATION};

/// Drains `glGetError`, logging every code. Errors if any were pending.
pub fn check_error(gl: &Context, what: &str) -> Result<(), GlError> {
    let mut codes = Vec::new();
    unsafe {
        let mut error = gl.get_error();
        while error != NO_ERROR {
            log::error!("{what}: error: {error:#06x}");
            codes.push(error);
            error = gl.get_error();
        }
    }
    if codes.is_empty() {
        Ok(())
    } else {
        Err(GlError {
            what: what.to_string(),
            codes,
        })
    }
}

/// Logs and discards errors left pending by earlier calls, so that the next
/// [check_error] only reports what the following step raised.
pub fn clear_stale_errors(gl: &Context, before: &str) -> usize {
    let mut stale = 0;
    unsafe {
        let mut error = gl.get_error();
        while error != NO_ERROR {
            log::warn!("stale gl error {error:#06x} pending before {before}");
            stale += 1;
            error = gl.get_error();
        }
    }
    stale
}

/// `GL_VERSION` and `GL_RENDERER` of the current context.
pub fn driver_banner(gl: &Context) -> String {
    let (version, renderer) = unsafe {
        (
            gl.get_parameter_string(VERSION),
            gl.get_parameter_string(RENDERER),
        )
    };
    format!("GL version: {} ({})", version.trim(), renderer.trim())
}

pub fn supports_debug_output(gl: &Context) -> bool {
    let version = gl.version();
    (version.major, version.minor) >= (4, 3) || gl.supported_extensions().contains("GL_KHR_debug")
}

#[allow(unused)]
pub trait Scene: Sized {
    /// Runs once with the context current, before the first frame.
    fn init(gl: &Context) -> Result<Self, SceneError>;
    /// Draw calls for one frame. The color buffer is already cleared.
    fn display(&mut self, gl: &Context);

    fn key_down(&mut self, keycode: Option<Keycode>, repeat: bool) {}
    fn key_up(&mut self, keycode: Option<Keycode>) {}

    fn sdl2_window(window_title: impl Into<String>) -> StartBuilder<Self> {
        StartBuilder::new(window_title.into())
    }
}

/// The window, its GL context and the loaded function table.
///
/// Fields drop in declaration order, so the GL side goes before the window
/// and SDL itself goes last.
pub struct Bootstrap {
    pub gl: Context,
    _gl_context: GLContext,
    pub window: Window,
    pub video: VideoSubsystem,
    pub sdl: Sdl,
}

impl Bootstrap {
    /// Window system, window, context, function loader, in that order. The
    /// first failure returns and drops whatever was already created.
    pub fn init(config: &WindowConfig) -> Result<Self, BootstrapError> {
        let sdl = sdl2::init().map_err(BootstrapError::WindowSystemInit)?;
        let video = sdl.video().map_err(BootstrapError::WindowSystemInit)?;

        let gl_attr = video.gl_attr();
        gl_attr.set_context_profile(match config.profile {
            GlProfile::Core => sdl2::video::GLProfile::Core,
            GlProfile::Compatibility => sdl2::video::GLProfile::Compatibility,
        });
        gl_attr.set_context_version(config.gl_version.major, config.gl_version.minor);

        config
            .validate_size()
            .map_err(BootstrapError::WindowCreation)?;
        let mut builder = video.window(&config.title, config.width, config.height);
        builder.opengl();
        if config.hidden {
            builder.hidden();
        }
        let window = builder
            .build()
            .map_err(|e| BootstrapError::WindowCreation(e.to_string()))?;

        let gl_context = window
            .gl_create_context()
            .map_err(BootstrapError::ContextCreation)?;
        window
            .gl_make_current(&gl_context)
            .map_err(BootstrapError::ContextCreation)?;
        if let Err(e) = video.gl_set_swap_interval(if config.vsync { 1 } else { 0 }) {
            log::warn!("cannot set swap interval: {e}");
        }

        // Function pointers only resolve once a context is current.
        if video.gl_get_proc_address("glGetString").is_null() {
            return Err(BootstrapError::LoaderInit(
                "glGetString did not resolve".to_string(),
            ));
        }
        let gl =
            unsafe { Context::from_loader_function(|s| video.gl_get_proc_address(s) as *const _) };

        log::info!(
            "created {}x{} window {:?} with a {} {:?} context",
            config.width,
            config.height,
            config.title,
            config.gl_version,
            config.profile
        );

        Ok(Bootstrap {
            gl,
            _gl_context: gl_context,
            window,
            video,
            sdl,
        })
    }
}

pub type DebugMessageCallback = dyn Fn(u32, u32, u32, u32, String) + Send + Sync;

pub struct StartBuilder<T: Scene> {
    config: WindowConfig,
    key_bindings: KeyBindings,
    scene: PhantomData<T>,
    debug_message_callback: Option<Box<DebugMessageCallback>>,
}

impl<T: Scene> StartBuilder<T> {
    pub fn new(window_title: String) -> Self {
        StartBuilder {
            config: WindowConfig {
                title: window_title,
                ..WindowConfig::default()
            },
            key_bindings: KeyBindings::default(),
            scene: PhantomData,
            debug_message_callback: None,
        }
    }

    /// Replaces every window setting, title included.
    pub fn config(mut self, config: WindowConfig) -> Self {
        self.config = config;
        self
    }

    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    pub fn gl_version(mut self, major: u8, minor: u8) -> Self {
        self.config.gl_version = GlVersion::new(major, minor);
        self
    }

    pub fn profile(mut self, profile: GlProfile) -> Self {
        self.config.profile = profile;
        self
    }

    pub fn vsync(mut self, vsync: bool) -> Self {
        self.config.vsync = vsync;
        self
    }

    pub fn key_bindings(mut self, key_bindings: KeyBindings) -> Self {
        self.key_bindings = key_bindings;
        self
    }

    pub fn debug_message_callback(
        mut self,
        callback: impl Fn(u32, u32, u32, u32, String) + Send + Sync + 'static,
    ) -> Self {
        self.debug_message_callback = Some(Box::new(callback));
        self
    }

    /// Opens the window and runs the frame loop until it closes.
    pub fn start(mut self) -> Result<(), BootstrapError> {
        let mut boot = Bootstrap::init(&self.config)?;

        println!("{}", driver_banner(&boot.gl));

        if let Some(callback) = self.debug_message_callback.take() {
            if supports_debug_output(&boot.gl) {
                unsafe {
                    boot.gl.enable(DEBUG_OUTPUT);
                    boot.gl
                        .debug_message_callback(move |source, typ, id, severity, message| {
                            callback(source, typ, id, severity, message.to_string())
                        });
                }
            } else {
                log::warn!("context has no debug output, ignoring debug message callback");
            }
        }

        let mut scene = T::init(&boot.gl)?;
        let mut event_pump = boot.sdl.event_pump().map_err(BootstrapError::EventPump)?;

        let mut frame_loop = FrameLoop::new(self.key_bindings);
        frame_loop.run(&mut SdlTarget {
            gl: &boot.gl,
            window: &boot.window,
            event_pump: &mut event_pump,
            scene: &mut scene,
        });

        log::info!("window closed, shutting down");
        Ok(())
    }
}

struct SdlTarget<'a, T: Scene> {
    gl: &'a Context,
    window: &'a Window,
    event_pump: &'a mut EventPump,
    scene: &'a mut T,
}

impl<T: Scene> FrameTarget for SdlTarget<'_, T> {
    fn render(&mut self) {
        unsafe { self.gl.clear(COLOR_BUFFER_BIT) };
        self.scene.display(self.gl);
    }

    fn present(&mut self) {
        self.window.gl_swap_window();
    }

    fn poll_events(&mut self, events: &mut Vec<InputEvent>) {
        events.extend(
            self.event_pump
                .poll_iter()
                .filter_map(|event| InputEvent::from_sdl(&event)),
        );
    }

    fn event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { keycode, repeat } => self.scene.key_down(keycode, repeat),
            InputEvent::KeyUp { keycode } => self.scene.key_up(keycode),
            InputEvent::Quit => {}
        }
    }
}
