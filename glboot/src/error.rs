use thiserror::Error;

use crate::load_shaders::ShaderStage;

/// Everything that can stop the bootstrap before the first frame.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("window system init failed: {0}")]
    WindowSystemInit(String),
    #[error("window creation failed: {0}")]
    WindowCreation(String),
    #[error("context creation failed: {0}")]
    ContextCreation(String),
    #[error("gl function loader init failed: {0}")]
    LoaderInit(String),
    #[error("event pump unavailable: {0}")]
    EventPump(String),
    #[error("scene setup failed: {0}")]
    Scene(#[from] SceneError),
}

impl BootstrapError {
    /// Short name of the step that failed, used in the `ERROR` line.
    pub fn stage(&self) -> &'static str {
        match self {
            BootstrapError::WindowSystemInit(_) => "window system init",
            BootstrapError::WindowCreation(_) => "window creation",
            BootstrapError::ContextCreation(_) => "context creation",
            BootstrapError::LoaderInit(_) => "loader init",
            BootstrapError::EventPump(_) => "event pump",
            BootstrapError::Scene(_) => "scene setup",
        }
    }

    /// Process exit status for this failure. Every init failure maps to -1.
    pub fn exit_code(&self) -> i32 {
        -1
    }
}

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("cannot create {stage} shader object: {reason}")]
    Create { stage: ShaderStage, reason: String },
    #[error("{stage} shader failed to compile:\n{log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("cannot create program object: {0}")]
    CreateProgram(String),
    #[error("program failed to link:\n{0}")]
    Link(String),
    #[error(transparent)]
    Gl(#[from] GlError),
}

#[derive(Debug, Error)]
pub enum SceneError {
    #[error(transparent)]
    Shader(#[from] ShaderError),
    #[error("cannot create {what}: {reason}")]
    Resource { what: &'static str, reason: String },
    #[error(transparent)]
    Gl(#[from] GlError),
}

/// Codes drained from `glGetError` after a step.
#[derive(Debug, Error)]
#[error("{what}: gl error(s) {codes:x?}")]
pub struct GlError {
    pub what: String,
    pub codes: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_init_failure_exits_with_minus_one() {
        let errors = [
            BootstrapError::WindowSystemInit("no video".into()),
            BootstrapError::WindowCreation("zero-sized window".into()),
            BootstrapError::ContextCreation("no gl".into()),
            BootstrapError::LoaderInit("glGetString unresolved".into()),
        ];
        for error in errors {
            assert_eq!(error.exit_code(), -1, "{error}");
        }
    }

    #[test]
    fn shader_errors_name_the_failed_stage() {
        let error = ShaderError::Compile {
            stage: ShaderStage::Fragment,
            log: "0:3: syntax error".into(),
        };
        let message = error.to_string();
        assert!(message.starts_with("fragment shader failed to compile"));
        assert!(message.contains("0:3: syntax error"));
    }

    #[test]
    fn scene_errors_wrap_into_bootstrap_errors() {
        let error: BootstrapError = SceneError::from(ShaderError::Link("oops".into())).into();
        assert_eq!(error.stage(), "scene setup");
        assert!(error.to_string().contains("oops"));
    }

    #[test]
    fn gl_error_lists_codes() {
        let error = GlError {
            what: "upload".into(),
            codes: vec![glow::INVALID_ENUM],
        };
        assert_eq!(error.to_string(), "upload: gl error(s) [500]");
    }
}
