//! Error types.
//!
//! Route table problems are configuration errors and surface when the table
//! is built. Loader failures travel through the navigation state to the
//! view; they never escape the event loop.

use thiserror::Error;

/// Router configuration that could not be read.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid router config: {0}")]
    Json(#[from] serde_json::Error),
}

/// A route pattern that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("parameter segment `{0}` has no name")]
    EmptyParamName(String),
    #[error("parameter name `{0}` contains characters other than letters, digits and `_`")]
    InvalidParamName(String),
    #[error("wildcard must be the last segment of `{0}`")]
    WildcardNotLast(String),
}

/// A route table that cannot be used for navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("invalid pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: PatternError,
    },
    #[error("no wildcard fallback is reachable from the root of the route table")]
    MissingFallback,
    #[error("more than one wildcard route under `{parent}`")]
    DuplicateWildcard { parent: String },
    #[error("wildcard route `{pattern}` cannot have children")]
    WildcardWithChildren { pattern: String },
    #[error("index route cannot have a pattern or children")]
    InvalidIndex,
    #[error("parameter `{name}` is bound twice along `{pattern}`")]
    DuplicateParam { name: String, pattern: String },
}

/// Why a loader did not produce a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoaderError {
    /// The server answered with a non-2xx status.
    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: u16 },
    /// The request never produced a response.
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },
    /// The body was not the JSON shape the loader expects.
    #[error("could not decode response from {url}: {reason}")]
    Decode { url: String, reason: String },
    /// The loader did not settle within the configured interval.
    #[error("loader timed out after {millis}ms")]
    Timeout { millis: u64 },
    #[error("{0}")]
    Other(String),
}
