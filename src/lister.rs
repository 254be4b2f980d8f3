use std::num::NonZeroUsize;

use tracing::{debug, info, warn};

use crate::{
    adapters::ObjectAdapter,
    model::{
        error::ListError,
        object::{ListRequest, ObjectRecord},
    },
};

#[derive(Clone, Debug, Default)]
pub struct ListOptions {
    /// Only keys starting with this prefix are listed.
    pub prefix: Option<String>,
    /// Upper bound on entries per page, forwarded to the provider.
    pub page_size: Option<i32>,
    /// Fail instead of requesting more than this many pages. `None` follows
    /// continuation tokens for as long as the service returns them.
    pub max_pages: Option<NonZeroUsize>,
}

/// Lists every object in `bucket`, following continuation tokens until the
/// provider stops returning one.
///
/// The first page is always requested, without a token. Each later request
/// carries exactly the token returned by the page before it. Records come back
/// in page order, then in the order the provider returned them within a page.
///
/// The first failed page aborts the whole listing: nothing collected so far is
/// returned and no retry is attempted.
pub async fn list_objects<A>(
    adapter: &A,
    bucket: &str,
    options: &ListOptions,
) -> Result<Vec<ObjectRecord>, ListError>
where
    A: ObjectAdapter + ?Sized,
{
    let mut objects = Vec::new();
    let mut req = ListRequest {
        prefix: options.prefix.clone(),
        page_size: options.page_size,
        ..ListRequest::new(bucket)
    };
    let mut pages = 0;

    loop {
        pages += 1;

        let page = adapter.list_objects_page(&req).await.map_err(|err| {
            warn!(bucket = bucket, page = pages, error = %err, "list_objects failed");
            err
        })?;

        debug!(
            bucket = bucket,
            page = pages,
            objects = page.objects.len(),
            more = page.next_token.is_some(),
            "page"
        );

        objects.extend(page.objects);

        let Some(token) = page.next_token else {
            break;
        };

        if let Some(max_pages) = options.max_pages {
            if pages >= max_pages.get() {
                warn!(bucket = bucket, pages = pages, "page limit reached with more pages pending");
                return Err(ListError::PageLimitExceeded { pages });
            }
        }

        req.continuation_token = Some(token);
    }

    info!(bucket = bucket, pages = pages, objects = objects.len(), "listed");

    Ok(objects)
}
