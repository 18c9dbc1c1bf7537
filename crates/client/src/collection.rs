//! A remote collection mirror with loading and error flags.

use std::future::Future;

use crate::error::ClientError;

/// The client's copy of one remote collection, plus its sync flags.
///
/// `value` is a possibly stale mirror of authoritative server state; every
/// mutation goes through a remote call and only the server's response is
/// applied back.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    pub value: T,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Collection<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            loading: false,
            error: None,
        }
    }
}

impl<T: Default> Default for Collection<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Clears the loading flag when dropped, so every exit path out of a sync
/// releases it.
struct LoadingGuard<'a> {
    flag: &'a mut bool,
}

impl<'a> LoadingGuard<'a> {
    fn acquire(flag: &'a mut bool) -> Self {
        *flag = true;
        Self { flag }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}

/// Run one remote call against a collection: set the loading flag, clear
/// the previous error, then either apply the success reducer to the mirror
/// or record the failure as a display string, leaving the mirror untouched.
pub(crate) async fn sync_collection<T, V, Fut>(
    collection: &mut Collection<T>,
    call: Fut,
    apply: impl FnOnce(&mut T, V),
) where
    Fut: Future<Output = Result<V, ClientError>>,
{
    let _loading = LoadingGuard::acquire(&mut collection.loading);
    collection.error = None;

    match call.await {
        Ok(value) => apply(&mut collection.value, value),
        Err(err) => {
            tracing::warn!(error = %err, "Remote call failed");
            collection.error = Some(err.to_string());
        }
    }
}
