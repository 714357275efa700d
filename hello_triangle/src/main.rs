mod cli;

use anyhow::Result;
use clap::Parser;
use glboot::{
    check_error, create_shader,
    glow::{Context, HasContext, NativeProgram},
    logging::{init_logging, log_debug_message},
    triangle::{FRAGMENT_SHADER_SOURCE, TRIANGLE, VERTEX_SHADER_SOURCE},
    BootstrapError, Scene, SceneError, VertexBuffer,
};

struct HelloTriangle {
    #[expect(unused)]
    program: NativeProgram,
    vertices: VertexBuffer,
}

impl Scene for HelloTriangle {
    fn init(gl: &Context) -> Result<Self, SceneError> {
        let program = create_shader(gl, VERTEX_SHADER_SOURCE, FRAGMENT_SHADER_SOURCE)?;
        unsafe { gl.use_program(Some(program)) };
        let vertices = VertexBuffer::upload(gl, &TRIANGLE)?;
        check_error(gl, "triangle setup")?;
        Ok(HelloTriangle { program, vertices })
    }

    fn display(&mut self, gl: &Context) {
        self.vertices.draw(gl);
    }
}

fn run(cli: &cli::Cli) -> Result<()> {
    let mut builder = HelloTriangle::sdl2_window(cli.title.clone()).config(cli.window_config());
    if cli.debug_gl {
        builder = builder.debug_message_callback(log_debug_message);
    }
    builder.start()?;
    Ok(())
}

fn main() {
    let cli = cli::Cli::parse();
    init_logging(cli.log.as_deref());

    if let Err(err) = run(&cli) {
        let (stage, code) = err
            .downcast_ref::<BootstrapError>()
            .map_or(("startup", -1), |e| (e.stage(), e.exit_code()));
        println!("ERROR: {stage} failed: {err}");
        log::error!("{err:#}");
        std::process::exit(code);
    }
}
