pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by `gedtree-core`.
///
/// GEDCOM parsing itself never fails: malformed lines and dangling references are tolerated and
/// resolved by fallback rules. Only configuration problems are reported here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid config JSON: {message}")]
    InvalidConfigJson { message: String },

    #[error("Invalid config value for `{key}`: {message}")]
    InvalidConfigValue { key: String, message: String },
}
