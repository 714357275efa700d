//! These need a display and a GL 3.3 driver, so they are ignored by default:
//! `cargo test -p glboot -- --ignored --test-threads=1`

use glboot::frame_loop::CLOSE_ACTION_LINE;
use glboot::glow::{Context, HasContext, COLOR_BUFFER_BIT, INVALID_VALUE, NO_ERROR, VERTEX_SHADER};
use glboot::sdl2::keyboard::Keycode;
use glboot::triangle::{FRAGMENT_SHADER_SOURCE, TRIANGLE, VERTEX_SHADER_SOURCE};
use glboot::{
    check_error, compile_into, compile_shader, create_shader, Bootstrap, FrameLoop, FrameTarget,
    InputEvent, KeyBindings, LoopState, ShaderError, ShaderStage, VertexBuffer, WindowConfig,
};

const BROKEN_SHADER: &str = "#version 330 core\nvoid main() { this is not glsl }\n";

fn hidden_window() -> Bootstrap {
    Bootstrap::init(&WindowConfig {
        hidden: true,
        ..WindowConfig::default()
    })
    .expect("cannot create a GL context")
}

/// Leaves an INVALID_ENUM pending, as a careless earlier call would.
fn leave_stale_error(gl: &Context) {
    unsafe { gl.bind_buffer(0xDEAD, None) };
}

#[test]
#[ignore = "needs a display"]
fn broken_source_is_reported_and_released() {
    let boot = hidden_window();
    let gl = &boot.gl;

    let shader = unsafe { gl.create_shader(VERTEX_SHADER) }.unwrap();
    let error = compile_into(gl, shader, ShaderStage::Vertex, BROKEN_SHADER).unwrap_err();
    match error {
        ShaderError::Compile { stage, log } => {
            assert_eq!(stage, ShaderStage::Vertex);
            assert!(!log.trim().is_empty());
        }
        other => panic!("unexpected error: {other}"),
    }

    // The name is gone: querying it is an INVALID_VALUE.
    unsafe {
        assert_eq!(gl.get_error(), NO_ERROR);
        gl.get_shader_compile_status(shader);
        assert_eq!(gl.get_error(), INVALID_VALUE);
    }
}

#[test]
#[ignore = "needs a display"]
fn failed_stage_stops_program_creation() {
    let boot = hidden_window();

    let error = create_shader(&boot.gl, VERTEX_SHADER_SOURCE, BROKEN_SHADER).unwrap_err();
    assert!(matches!(
        error,
        ShaderError::Compile {
            stage: ShaderStage::Fragment,
            ..
        }
    ));
    check_error(&boot.gl, "after failed program").unwrap();
}

#[test]
#[ignore = "needs a display"]
fn triangle_program_draws_without_errors() {
    let boot = hidden_window();
    let gl = &boot.gl;

    let program = create_shader(gl, VERTEX_SHADER_SOURCE, FRAGMENT_SHADER_SOURCE).unwrap();
    let vertices = VertexBuffer::upload(gl, &TRIANGLE).unwrap();
    unsafe {
        gl.use_program(Some(program));
        gl.clear(COLOR_BUFFER_BIT);
    }
    vertices.draw(gl);
    check_error(gl, "draw triangle").unwrap();
}

#[test]
#[ignore = "needs a display"]
fn uploaded_vertices_read_back_unchanged() {
    let boot = hidden_window();

    let vertices = VertexBuffer::upload(&boot.gl, &TRIANGLE).unwrap();
    let bytes = vertices.read_back(&boot.gl).unwrap();

    assert_eq!(bytes.len(), 24);
    assert_eq!(bytes.as_slice(), bytemuck::cast_slice::<_, u8>(&TRIANGLE));
}

#[test]
#[ignore = "needs a display"]
fn valid_stage_compiles() {
    let boot = hidden_window();
    let shader = compile_shader(&boot.gl, ShaderStage::Vertex, VERTEX_SHADER_SOURCE).unwrap();
    unsafe {
        assert!(boot.gl.get_shader_compile_status(shader));
        boot.gl.delete_shader(shader);
    }
}

#[test]
#[ignore = "needs a display"]
fn stale_errors_do_not_fail_program_creation() {
    let boot = hidden_window();
    let gl = &boot.gl;

    leave_stale_error(gl);
    let program = create_shader(gl, VERTEX_SHADER_SOURCE, FRAGMENT_SHADER_SOURCE).unwrap();
    leave_stale_error(gl);
    let vertices = VertexBuffer::upload(gl, &TRIANGLE).unwrap();

    unsafe { gl.use_program(Some(program)) };
    vertices.draw(gl);
    check_error(gl, "draw after stale errors").unwrap();
}

#[test]
#[ignore = "needs a display"]
fn read_back_unmaps_even_with_stale_errors() {
    let boot = hidden_window();
    let gl = &boot.gl;
    let program = create_shader(gl, VERTEX_SHADER_SOURCE, FRAGMENT_SHADER_SOURCE).unwrap();
    let vertices = VertexBuffer::upload(gl, &TRIANGLE).unwrap();

    leave_stale_error(gl);
    let bytes = vertices.read_back(gl).unwrap();
    assert_eq!(bytes.as_slice(), bytemuck::cast_slice::<_, u8>(&TRIANGLE));

    // Drawing from a still-mapped buffer would be an INVALID_OPERATION.
    unsafe { gl.use_program(Some(program)) };
    vertices.draw(gl);
    check_error(gl, "draw after read-back").unwrap();
}

/// Draws the triangle on the real window and presses Escape on frame 3.
struct EscapeOnThirdFrame<'a> {
    boot: &'a Bootstrap,
    vertices: VertexBuffer,
    frame: u32,
}

impl FrameTarget for EscapeOnThirdFrame<'_> {
    fn render(&mut self) {
        unsafe { self.boot.gl.clear(COLOR_BUFFER_BIT) };
        self.vertices.draw(&self.boot.gl);
    }

    fn present(&mut self) {
        self.boot.window.gl_swap_window();
    }

    fn poll_events(&mut self, events: &mut Vec<InputEvent>) {
        self.frame += 1;
        if self.frame == 3 {
            events.push(InputEvent::KeyDown {
                keycode: Some(Keycode::Escape),
                repeat: false,
            });
        }
    }
}

#[test]
#[ignore = "needs a display"]
fn escape_closes_a_real_window_and_reports_the_action() {
    let boot = hidden_window();
    let program =
        create_shader(&boot.gl, VERTEX_SHADER_SOURCE, FRAGMENT_SHADER_SOURCE).unwrap();
    unsafe { boot.gl.use_program(Some(program)) };
    let vertices = VertexBuffer::upload(&boot.gl, &TRIANGLE).unwrap();

    let mut frame_loop = FrameLoop::with_output(KeyBindings::default(), Vec::new());
    let mut target = EscapeOnThirdFrame {
        boot: &boot,
        vertices,
        frame: 0,
    };

    assert_eq!(frame_loop.run(&mut target), 3);
    assert_eq!(frame_loop.state(), LoopState::Terminated);
    check_error(&boot.gl, "frames").unwrap();
    let out = String::from_utf8(frame_loop.into_output()).unwrap();
    assert_eq!(out.trim_end(), CLOSE_ACTION_LINE);
}
