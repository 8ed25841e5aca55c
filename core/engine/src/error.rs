use std::borrow::Cow;
use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The pipeline stage an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Capture,
    Transcription,
    Translation,
    Synthesis,
}

impl PipelineStage {
    pub fn name(&self) -> &'static str {
        match self {
            PipelineStage::Capture => "capture",
            PipelineStage::Transcription => "transcription",
            PipelineStage::Translation => "translation",
            PipelineStage::Synthesis => "synthesis",
        }
    }
}

impl Display for PipelineStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone)]
pub struct PipelineError {
    stage: Option<PipelineStage>,
    message: Cow<'static, str>,
}

impl PipelineError {
    pub fn new<T>(message: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        Self {
            stage: None,
            message: message.into(),
        }
    }

    pub fn at_stage<T>(stage: PipelineStage, message: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        Self {
            stage: Some(stage),
            message: message.into(),
        }
    }

    pub fn capture<T: Into<Cow<'static, str>>>(message: T) -> Self {
        Self::at_stage(PipelineStage::Capture, message)
    }

    pub fn transcription<T: Into<Cow<'static, str>>>(message: T) -> Self {
        Self::at_stage(PipelineStage::Transcription, message)
    }

    pub fn translation<T: Into<Cow<'static, str>>>(message: T) -> Self {
        Self::at_stage(PipelineStage::Translation, message)
    }

    pub fn synthesis<T: Into<Cow<'static, str>>>(message: T) -> Self {
        Self::at_stage(PipelineStage::Synthesis, message)
    }

    pub fn stage(&self) -> Option<PipelineStage> {
        self.stage
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for PipelineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.stage {
            Some(stage) => write!(f, "{} error: {}", stage, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl Error for PipelineError {}

pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_names_failing_stage() {
        let err = PipelineError::transcription("service unreachable");
        assert_eq!(err.stage(), Some(PipelineStage::Transcription));
        assert_eq!(err.to_string(), "transcription error: service unreachable");
    }

    #[test]
    fn test_error_without_stage() {
        let err = PipelineError::new("bad config");
        assert_eq!(err.stage(), None);
        assert_eq!(err.to_string(), "bad config");
    }
}
