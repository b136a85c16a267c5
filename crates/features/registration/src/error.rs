use ltrc_store::StoreError;
use std::borrow::Cow;

/// A specialized [`RegistrationError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    /// Persisting the registration state failed.
    #[error("Registration store error{}: {source}", format_context(.context))]
    Store { source: StoreError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal registration error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

pub trait RegistrationErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, RegistrationError>;
}

impl<T> RegistrationErrorExt<T> for Result<T, RegistrationError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                RegistrationError::Store { context: c, .. }
                | RegistrationError::Internal { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl From<StoreError> for RegistrationError {
    #[inline]
    fn from(source: StoreError) -> Self {
        Self::Store { source, context: None }
    }
}

impl<T> RegistrationErrorExt<T> for Result<T, StoreError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, RegistrationError> {
        self.map_err(|source| RegistrationError::Store { source, context: Some(context.into()) })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
