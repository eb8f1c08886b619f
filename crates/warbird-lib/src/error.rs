use thiserror::Error;

/// Convenient result alias for the warbird library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a component name could not be found in its catalog.
    #[error("unknown {kind} '{name}'{}", format_suggestions(.suggestions))]
    UnknownComponent {
        kind: String,
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a design selection fails validation.
    #[error("invalid design: {message}")]
    DesignValidation { message: String },

    /// Raised when the same feature is selected more than once.
    #[error("duplicate feature selected: {name}")]
    DuplicateFeature { name: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON (de)serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_component_without_suggestions_renders_plainly() {
        let err = Error::UnknownComponent {
            kind: "engine".to_string(),
            name: "v13-9999".to_string(),
            suggestions: vec![],
        };
        assert_eq!(format!("{}", err), "unknown engine 'v13-9999'");
    }

    #[test]
    fn unknown_component_with_one_suggestion_asks_did_you_mean() {
        let err = Error::UnknownComponent {
            kind: "engine".to_string(),
            name: "v12-1540".to_string(),
            suggestions: vec!["v12-1450".to_string()],
        };
        assert_eq!(
            format!("{}", err),
            "unknown engine 'v12-1540'. Did you mean 'v12-1450'?"
        );
    }

    #[test]
    fn unknown_component_with_many_suggestions_lists_them() {
        let err = Error::UnknownComponent {
            kind: "wing".to_string(),
            name: "eliptical".to_string(),
            suggestions: vec!["elliptical".to_string(), "rectangular".to_string()],
        };
        let rendered = format!("{}", err);
        assert!(rendered.contains("Did you mean one of:"));
        assert!(rendered.contains("'elliptical'"));
        assert!(rendered.contains("'rectangular'"));
    }
}
