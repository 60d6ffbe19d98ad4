use thiserror::Error;

pub type SchedResult<T> = Result<T, SchedError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedError {
    #[error("invalid scheduler name: '{0}'")]
    UnknownPolicy(String),
}

impl SchedError {
    pub fn unknown_policy(name: impl Into<String>) -> Self {
        SchedError::UnknownPolicy(name.into())
    }
}
