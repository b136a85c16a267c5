use ltrc_store::StoreError;
use std::borrow::Cow;

/// A specialized [`PlacementError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum PlacementError {
    /// Persisting or clearing the history log failed.
    #[error("Placement store error{}: {source}", format_context(.context))]
    Store { source: StoreError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal placement error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

pub trait PlacementErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, PlacementError>;
}

impl<T> PlacementErrorExt<T> for Result<T, PlacementError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                PlacementError::Store { context: c, .. }
                | PlacementError::Internal { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl From<StoreError> for PlacementError {
    #[inline]
    fn from(source: StoreError) -> Self {
        Self::Store { source, context: None }
    }
}

impl<T> PlacementErrorExt<T> for Result<T, StoreError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, PlacementError> {
        self.map_err(|source| PlacementError::Store { source, context: Some(context.into()) })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
