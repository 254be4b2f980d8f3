use futures::future::BoxFuture;

use crate::model;

pub mod gcs;
#[cfg(test)]
pub mod mock;
pub mod s3;

/// A provider that can return a single page of a bucket listing.
///
/// Implementations issue exactly one remote call per invocation. Walking the
/// continuation tokens is the caller's job, see [`crate::lister::list_objects`].
pub trait ObjectAdapter {
    fn list_objects_page<'a>(
        &'a self,
        req: &'a model::object::ListRequest,
    ) -> BoxFuture<'a, Result<model::object::ListPage, model::error::ListError>>;
}
