//! Error types with diagnostics using miette
//!
//! Shapes and layouts never fail; the only fallible step is binding a
//! [`Surface`](crate::surface::Surface) to something it can draw on.

use miette::Diagnostic;
use thiserror::Error;

/// Errors that occur while binding a surface to its drawing target
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("no drawable surface could be resolved for target `{target}`")]
    #[diagnostic(
        code(easel::surface::invalid_target),
        help("pass a canvas, a container element, or make sure the host exposes a body")
    )]
    InvalidTarget { target: String },

    #[error("canvas resolved for `{target}` has no 2D drawing context")]
    #[diagnostic(code(easel::surface::context_unavailable))]
    ContextUnavailable { target: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_target_message_names_target() {
        let err = SurfaceError::InvalidTarget { target: "#missing".into() };
        assert_eq!(
            err.to_string(),
            "no drawable surface could be resolved for target `#missing`"
        );
        assert_eq!(
            err.code().map(|c| c.to_string()).as_deref(),
            Some("easel::surface::invalid_target")
        );
    }
}
