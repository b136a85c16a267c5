use ltrc_store::StoreError;
use std::borrow::Cow;

/// A specialized [`PortalError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// Persisting the theme preference failed.
    #[error("Portal store error{}: {source}", format_context(.context))]
    Store { source: StoreError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal portal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

pub trait PortalErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, PortalError>;
}

impl<T> PortalErrorExt<T> for Result<T, PortalError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                PortalError::Store { context: c, .. }
                | PortalError::Internal { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl From<StoreError> for PortalError {
    #[inline]
    fn from(source: StoreError) -> Self {
        Self::Store { source, context: None }
    }
}

impl<T> PortalErrorExt<T> for Result<T, StoreError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, PortalError> {
        self.map_err(|source| PortalError::Store { source, context: Some(context.into()) })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
