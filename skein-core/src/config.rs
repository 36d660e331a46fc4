// skein-core - Runtime configuration
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Runtime configuration for an [`Interpreter`](crate::Interpreter).

use tracing::warn;

use crate::eval::DEFAULT_MAX_EVAL_DEPTH;

/// Environment variable overriding [`Config::max_eval_depth`].
pub const MAX_EVAL_DEPTH_VAR: &str = "SKEIN_MAX_EVAL_DEPTH";

/// Interpreter settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum nesting of non-tail evaluation before `DepthExceeded` is raised.
    pub max_eval_depth: usize,
    /// Whether to evaluate the bootstrap definitions (`load-file`).
    pub bootstrap: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_eval_depth: DEFAULT_MAX_EVAL_DEPTH,
            bootstrap: true,
        }
    }
}

impl Config {
    /// Defaults, overridden by `SKEIN_MAX_EVAL_DEPTH` when it holds a
    /// positive integer. Anything else is logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Config::default();
        if let Ok(raw) = std::env::var(MAX_EVAL_DEPTH_VAR) {
            match parse_depth(&raw) {
                Some(depth) => config.max_eval_depth = depth,
                None => warn!(
                    value = %raw,
                    "ignoring {}: expected a positive integer", MAX_EVAL_DEPTH_VAR
                ),
            }
        }
        config
    }

    #[must_use]
    pub fn with_max_eval_depth(mut self, depth: usize) -> Self {
        self.max_eval_depth = depth;
        self
    }

    #[must_use]
    pub fn with_bootstrap(mut self, bootstrap: bool) -> Self {
        self.bootstrap = bootstrap;
        self
    }
}

/// Parse a depth limit, rejecting zero and non-numbers.
pub fn parse_depth(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|&d| d > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.max_eval_depth, 10_000);
        assert!(config.bootstrap);
    }

    #[test]
    fn test_builders() {
        let config = Config::default()
            .with_max_eval_depth(50)
            .with_bootstrap(false);
        assert_eq!(config.max_eval_depth, 50);
        assert!(!config.bootstrap);
    }

    #[test]
    fn test_parse_depth() {
        assert_eq!(parse_depth("500"), Some(500));
        assert_eq!(parse_depth(" 42 "), Some(42));
        assert_eq!(parse_depth("0"), None);
        assert_eq!(parse_depth("-1"), None);
        assert_eq!(parse_depth("lots"), None);
    }
}
