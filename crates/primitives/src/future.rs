use std::future::Future;
use std::pin::Pin;

/// A pinned, boxed future that is required to be Send and 'static.
///
/// Pickers hand one of these back per request, the same way a host API
/// returns a promise: the request is already issued when the call returns.
pub type BoxFutureStatic<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;
