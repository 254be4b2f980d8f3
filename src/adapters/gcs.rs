use std::time::{Duration, SystemTime};

use futures::future::BoxFuture;
use google_cloud_storage::http::objects::{list::ListObjectsRequest, Object};

use crate::{
    adapters,
    model::{
        error::ListError,
        object::{ListPage, ListRequest, ObjectRecord},
    },
};

impl adapters::ObjectAdapter for google_cloud_storage::client::Client {
    fn list_objects_page<'a>(
        &'a self,
        req: &'a ListRequest,
    ) -> BoxFuture<'a, Result<ListPage, ListError>> {
        let gcs_req = ListObjectsRequest {
            bucket: req.bucket.clone(),
            prefix: req.prefix.clone(),
            max_results: req.page_size,
            page_token: req
                .continuation_token
                .as_ref()
                .map(|tok| tok.as_str().to_string()),
            ..Default::default()
        };

        Box::pin(async move {
            let lo = self
                .list_objects(&gcs_req)
                .await
                .map_err(|err| ListError::request(err.to_string()))?;

            let objects = lo
                .items
                .unwrap_or_default()
                .into_iter()
                .map(record_from_object)
                .collect();

            Ok(ListPage::new(objects, lo.next_page_token.as_deref()))
        })
    }
}

fn record_from_object(obj: Object) -> ObjectRecord {
    let last_modified = obj.updated.and_then(|updated| {
        let secs = u64::try_from(updated.unix_timestamp()).ok()?;
        Some(SystemTime::UNIX_EPOCH + Duration::new(secs, updated.nanosecond()))
    });

    ObjectRecord {
        key: obj.name,
        size: Some(obj.size),
        last_modified,
        e_tag: Some(obj.etag).filter(|tag| !tag.is_empty()),
    }
}
