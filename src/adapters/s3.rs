use std::time::SystemTime;

use aws_sdk_s3::{
    error::{DisplayErrorContext, ProvideErrorMetadata},
    operation::list_objects_v2::ListObjectsV2Output,
};
use futures::future::BoxFuture;

use crate::{
    adapters,
    model::{
        error::ListError,
        object::{ListPage, ListRequest, ObjectRecord},
    },
};

impl adapters::ObjectAdapter for aws_sdk_s3::Client {
    fn list_objects_page<'a>(
        &'a self,
        req: &'a ListRequest,
    ) -> BoxFuture<'a, Result<ListPage, ListError>> {
        let mut builder = self.list_objects_v2().bucket(&req.bucket);

        if let Some(prefix) = &req.prefix {
            builder = builder.prefix(prefix);
        }

        if let Some(page_size) = req.page_size {
            builder = builder.max_keys(page_size);
        }

        if let Some(tok) = &req.continuation_token {
            builder = builder.continuation_token(tok.as_str());
        }

        Box::pin(async move {
            let lo = builder.send().await.map_err(|err| {
                // Prefer the service's own text ("Access Denied") over the SDK's wrapper.
                let message = match err.message() {
                    Some(msg) => msg.to_string(),
                    None => DisplayErrorContext(&err).to_string(),
                };
                ListError::request(message)
            })?;

            Ok(page_from_output(&lo))
        })
    }
}

fn page_from_output(lo: &ListObjectsV2Output) -> ListPage {
    let objects = lo
        .contents()
        .iter()
        .filter_map(|o| {
            let key = o.key()?;
            Some(ObjectRecord {
                size: o.size(),
                last_modified: o.last_modified().and_then(|t| SystemTime::try_from(*t).ok()),
                e_tag: o.e_tag().map(|tag| tag.to_string()),
                ..ObjectRecord::new(key)
            })
        })
        .collect();

    ListPage::new(objects, lo.next_continuation_token())
}
