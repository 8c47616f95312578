use crate::scene::style::TemplateKind;

/// Convenience result type used across snapframe.
pub type SnapResult<T> = Result<T, SnapError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum SnapError {
    /// Invalid style parameters (too few gradient colors, malformed hex, out-of-range blur).
    #[error("config error: {0}")]
    Config(String),

    /// Unreadable source image.
    #[error("decode error: {0}")]
    Decode(String),

    /// Input rejected by the upstream validator (file size, format, resolution).
    #[error("input rejected: {0}")]
    Rejected(String),

    /// Failure inside a template render, tagged with the template kind.
    #[error("render error in {template} template: {source}")]
    Render {
        /// Template that was being rendered.
        template: TemplateKind,
        /// Original cause.
        #[source]
        source: Box<SnapError>,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SnapError {
    /// Build a [`SnapError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`SnapError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`SnapError::Rejected`] value.
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }

    /// Wrap `source` as a [`SnapError::Render`] for `template`.
    ///
    /// An error that is already tagged is returned unchanged.
    pub fn render(template: TemplateKind, source: SnapError) -> Self {
        match source {
            already @ Self::Render { .. } => already,
            other => Self::Render {
                template,
                source: Box::new(other),
            },
        }
    }

    /// Innermost cause, looking through [`SnapError::Render`].
    pub fn root(&self) -> &SnapError {
        match self {
            Self::Render { source, .. } => source.root(),
            other => other,
        }
    }

    /// Return `true` for bad caller input (config, decode, rejected). These are never retried.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self.root(),
            Self::Config(_) | Self::Decode(_) | Self::Rejected(_)
        )
    }

    /// Message suitable for an end user.
    ///
    /// User errors carry their actionable detail; everything else collapses to a generic failure.
    pub fn user_message(&self) -> String {
        match self.root() {
            Self::Config(msg) => format!("Invalid style settings: {msg}"),
            Self::Decode(msg) => format!("Could not read the image: {msg}"),
            Self::Rejected(msg) => msg.clone(),
            _ => "Something went wrong while rendering the screenshot. Please try again.".to_owned(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
