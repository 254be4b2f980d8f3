use std::{collections::VecDeque, sync::Mutex};

use futures::future::{self, BoxFuture};

use crate::{
    adapters,
    model::{
        error::ListError,
        object::{ListPage, ListRequest, ObjectRecord},
    },
};

/// Replays a fixed script of page outcomes and remembers every request it saw.
pub struct MockClient {
    pages: Mutex<VecDeque<Result<ListPage, ListError>>>,
    requests: Mutex<Vec<ListRequest>>,
}

impl MockClient {
    pub fn new(pages: Vec<Result<ListPage, ListError>>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ListRequest> {
        self.requests
            .lock()
            .expect("failed to acquire `requests` guard")
            .clone()
    }
}

/// Builds a page of bare keys.
pub fn page(keys: &[&str], next_token: Option<&str>) -> Result<ListPage, ListError> {
    Ok(ListPage::new(
        keys.iter().map(|key| ObjectRecord::new(*key)).collect(),
        next_token,
    ))
}

impl adapters::ObjectAdapter for MockClient {
    fn list_objects_page<'a>(
        &'a self,
        req: &'a ListRequest,
    ) -> BoxFuture<'a, Result<ListPage, ListError>> {
        self.requests
            .lock()
            .expect("failed to acquire `requests` guard")
            .push(req.clone());

        let next = self
            .pages
            .lock()
            .expect("failed to acquire `pages` guard")
            .pop_front()
            .unwrap_or_else(|| Err(ListError::request("mock script exhausted")));

        Box::pin(future::ready(next))
    }
}
