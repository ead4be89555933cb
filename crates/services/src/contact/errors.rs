use super::ports::NotifyError;

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("Env sozlanmagan")]
    ConfigurationMissing,
    #[error(transparent)]
    Notify(#[from] NotifyError),
}
