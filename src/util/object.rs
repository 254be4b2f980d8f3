use crate::model::error::ListError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    Aws,
    Gcs,
}

/// Splits `s3://bucket` or `gs://bucket` into provider and bucket name.
/// A bare name without a scheme is taken as an S3 bucket.
pub fn parse_bucket_uri(bucket_uri: &str) -> Result<(Provider, &str), ListError> {
    match bucket_uri.split_once("://") {
        None => Ok((Provider::Aws, bucket_uri)),
        Some(("s3", bucket)) => Ok((Provider::Aws, bucket)),
        Some(("gs", bucket)) => Ok((Provider::Gcs, bucket)),
        Some(_) => Err(ListError::config(format!(
            "failed to parse provider of: {}",
            bucket_uri
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_provider() {
        assert!(matches!(parse_bucket_uri("s3://bucket"), Ok((Provider::Aws, "bucket"))));
        assert!(matches!(parse_bucket_uri("gs://bucket"), Ok((Provider::Gcs, "bucket"))));
        assert!(matches!(parse_bucket_uri("ftp://bucket"), Err(ListError::Config { .. })));
    }

    #[test]
    fn test_parse_bare_bucket() {
        assert!(matches!(parse_bucket_uri("demo"), Ok((Provider::Aws, "demo"))));
        assert!(matches!(parse_bucket_uri("s3://"), Ok((Provider::Aws, ""))));
    }
}
