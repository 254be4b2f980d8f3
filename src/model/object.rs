use std::time::SystemTime;

/// One entry of a bucket listing. Only `key` is guaranteed; the rest is
/// whatever metadata the provider returned alongside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectRecord {
    pub key: String,
    pub size: Option<i64>,
    pub last_modified: Option<SystemTime>,
    pub e_tag: Option<String>,
}

impl ObjectRecord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            size: None,
            last_modified: None,
            e_tag: None,
        }
    }
}

/// Opaque pagination cursor. Never empty: an empty string from the service
/// means there is no next page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContinuationToken(String);

impl ContinuationToken {
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ContinuationToken> for String {
    fn from(token: ContinuationToken) -> Self {
        token.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListRequest {
    pub bucket: String,
    pub prefix: Option<String>,
    pub page_size: Option<i32>,
    pub continuation_token: Option<ContinuationToken>,
}

impl ListRequest {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            prefix: None,
            page_size: None,
            continuation_token: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListPage {
    pub objects: Vec<ObjectRecord>,
    pub next_token: Option<ContinuationToken>,
}

impl ListPage {
    pub fn new(objects: Vec<ObjectRecord>, next_token: Option<&str>) -> Self {
        Self {
            objects,
            next_token: next_token.and_then(ContinuationToken::new),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_is_no_token() {
        assert!(ContinuationToken::new("").is_none());
        assert_eq!(ContinuationToken::new("T1").unwrap().as_str(), "T1");
    }

    #[test]
    fn test_page_normalizes_token() {
        let page = ListPage::new(vec![ObjectRecord::new("a.txt")], Some(""));
        assert!(page.next_token.is_none());

        let page = ListPage::new(Vec::new(), Some("T1"));
        assert_eq!(page.next_token, ContinuationToken::new("T1"));
    }
}
