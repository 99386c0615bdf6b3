use crate::domain::ports::{FormSnapshot, Persistence};
use crate::utils::error::{CoopError, Result};

/// Re-checks the snapshot and hands its normalized payload to `store`.
/// Nothing reaches the store unless every required field is valid.
pub fn submit<S, P>(snapshot: &S, store: &P) -> Result<()>
where
    S: FormSnapshot,
    P: Persistence<S::Payload> + ?Sized,
{
    let payload = snapshot.to_payload().map_err(|e| match e {
        CoopError::MissingFieldError { field } => CoopError::FormRejected {
            field,
            reason: "required".to_string(),
        },
        CoopError::InvalidFieldValueError { field, reason, .. } => {
            CoopError::FormRejected { field, reason }
        }
        other => other,
    })?;

    store.persist(payload).map_err(|e| match e {
        CoopError::PersistenceError { .. } => e,
        other => CoopError::PersistenceError {
            message: other.to_string(),
        },
    })?;

    tracing::debug!("form submitted");
    Ok(())
}

/// Callback flavour of [`submit`] for views that react with notifications.
pub fn submit_with_callbacks<S, P, F, G>(snapshot: &S, store: &P, on_success: F, on_error: G)
where
    S: FormSnapshot,
    P: Persistence<S::Payload> + ?Sized,
    F: FnOnce(),
    G: FnOnce(&CoopError),
{
    match submit(snapshot, store) {
        Ok(()) => on_success(),
        Err(e) => {
            tracing::warn!(error = %e, "form submission failed");
            on_error(&e)
        }
    }
}
