pub type BmivizResult<T> = Result<T, BmivizError>;

#[derive(thiserror::Error, Debug)]
pub enum BmivizError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("implausible value: bmi {bmi:.1} is beyond the {ceiling} chart ceiling; check your weight and height")]
    ImplausibleValue { bmi: f64, ceiling: f64 },

    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BmivizError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn implausible(bmi: f64, ceiling: f64) -> Self {
        Self::ImplausibleValue { bmi, ceiling }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
