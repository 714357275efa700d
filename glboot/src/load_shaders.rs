use std::fmt;

use glow::{Context, HasContext as _, NativeProgram, NativeShader, FRAGMENT_SHADER, VERTEX_SHADER};

use crate::{check_error, clear_stale_errors, ShaderError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => VERTEX_SHADER,
            ShaderStage::Fragment => FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}

/// Compiles one stage into a fresh shader object.
pub fn compile_shader(
    gl: &Context,
    stage: ShaderStage,
    source: &str,
) -> Result<NativeShader, ShaderError> {
    let shader = unsafe { gl.create_shader(stage.gl_enum()) }
        .map_err(|reason| ShaderError::Create { stage, reason })?;
    compile_into(gl, shader, stage, source)
}

/// Compiles `source` into an existing shader object and takes ownership of
/// it. On failure the object is deleted before the driver log is returned,
/// so nothing stays allocated.
pub fn compile_into(
    gl: &Context,
    shader: NativeShader,
    stage: ShaderStage,
    source: &str,
) -> Result<NativeShader, ShaderError> {
    unsafe {
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            log::error!("failed to compile {stage} shader:\n{log}");
            gl.delete_shader(shader);
            return Err(ShaderError::Compile { stage, log });
        }
    }
    log::debug!("compiled {stage} shader");
    Ok(shader)
}

/// Compiles both stages and links them into a program.
///
/// Each stage is checked before anything is attached: a failed stage stops
/// here and every object created so far is released. Errors already pending
/// when this is called are logged and do not fail the program.
pub fn create_shader(
    gl: &Context,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<NativeProgram, ShaderError> {
    clear_stale_errors(gl, "create_shader");
    let vertex = compile_shader(gl, ShaderStage::Vertex, vertex_source)?;
    let fragment = match compile_shader(gl, ShaderStage::Fragment, fragment_source) {
        Ok(fragment) => fragment,
        Err(e) => {
            unsafe { gl.delete_shader(vertex) };
            return Err(e);
        }
    };
    let result = link_program(gl, &[vertex, fragment]);
    unsafe {
        // The program keeps its own copy of the linked stages.
        gl.delete_shader(vertex);
        gl.delete_shader(fragment);
    }
    result
}

fn link_program(gl: &Context, shaders: &[NativeShader]) -> Result<NativeProgram, ShaderError> {
    unsafe {
        let program = gl.create_program().map_err(ShaderError::CreateProgram)?;
        for &shader in shaders {
            gl.attach_shader(program, shader);
        }
        gl.link_program(program);

        let linked = gl.get_program_link_status(program);
        for &shader in shaders {
            gl.detach_shader(program, shader);
        }
        if !linked {
            let log = gl.get_program_info_log(program);
            log::error!("failed to link program:\n{log}");
            gl.delete_program(program);
            return Err(ShaderError::Link(log));
        }
        if let Err(e) = check_error(gl, "link program") {
            gl.delete_program(program);
            return Err(e.into());
        }
        Ok(program)
    }
}
