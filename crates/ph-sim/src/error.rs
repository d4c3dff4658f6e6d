use ph_agent::AgentError;
use ph_core::CoreError;
use ph_field::FieldError;
use thiserror::Error;

/// Boxed error returned by a [`Renderer`](crate::Renderer).
pub type RenderError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("field error: {0}")]
    Field(#[from] FieldError),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("renderer failed: {0}")]
    Render(#[source] RenderError),
}

pub type SimResult<T> = Result<T, SimError>;
