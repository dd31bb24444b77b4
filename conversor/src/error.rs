use thiserror::Error;

/// The pipeline's only error kind. Malformed currency or percentage text
/// parses to this sentinel and the callers fall back to defined defaults
/// (canonical zero or markup passthrough); nothing in the pipeline panics
/// or propagates further.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("not a number: '{0}'")]
    NotANumber(String),
}
