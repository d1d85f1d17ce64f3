use thiserror::Error;

#[derive(Debug, Error)]
pub enum PullingError {
    #[error("missing required datasheet field: {0}")]
    MissingField(&'static str),

    #[error("invalid datasheet: {0}")]
    InvalidDatasheet(String),

    #[error(
        "anchor depth not found: no ANCHOR, SHOE or pump row carries a depth; \
         indicate the anchor depth manually"
    )]
    AnchorDepthUnresolved,

    #[error("internal defect: {0}")]
    Defect(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Coarse error taxonomy used by outer layers to pick a user-facing outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or incomplete input, rejected before generation.
    Validation,
    /// A derived quantity required by a committed branch could not be resolved.
    Configuration,
    /// Anything else: a programming fault or an environment failure.
    Defect,
}

impl PullingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PullingError::MissingField(_)
            | PullingError::InvalidDatasheet(_)
            | PullingError::Yaml(_)
            | PullingError::Json(_) => ErrorKind::Validation,
            PullingError::AnchorDepthUnresolved => ErrorKind::Configuration,
            PullingError::Defect(_) | PullingError::Io(_) => ErrorKind::Defect,
        }
    }
}

pub type Result<T> = std::result::Result<T, PullingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_depth_is_a_configuration_error() {
        assert_eq!(
            PullingError::AnchorDepthUnresolved.kind(),
            ErrorKind::Configuration
        );
    }

    #[test]
    fn input_errors_are_validation_errors() {
        assert_eq!(
            PullingError::MissingField("well_id").kind(),
            ErrorKind::Validation
        );
        let bad_json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(PullingError::from(bad_json).kind(), ErrorKind::Validation);
    }

    #[test]
    fn io_errors_are_defects() {
        let err = PullingError::from(std::io::Error::other("disk full"));
        assert_eq!(err.kind(), ErrorKind::Defect);
    }

    #[test]
    fn anchor_message_asks_for_manual_depth() {
        let msg = PullingError::AnchorDepthUnresolved.to_string();
        assert!(msg.contains("manually"));
    }
}
