use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlaygroundError>;

#[derive(Debug, Error)]
pub enum PlaygroundError {
    #[error("cannot read config '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{}': {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("training request failed: {0}")]
    Http(#[source] ureq::Error),

    #[error("invalid training response: {0}")]
    Decode(#[source] ureq::Error),

    #[error("training worker exited without a reply")]
    WorkerGone,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn http_failure_keeps_its_cause() {
        let err = PlaygroundError::Http(ureq::Error::StatusCode(503));
        assert!(err.to_string().starts_with("training request failed"));
        let cause = err.source().expect("ureq error as source");
        assert!(cause.downcast_ref::<ureq::Error>().is_some());
    }

    #[test]
    fn decode_failure_keeps_its_cause() {
        let err = PlaygroundError::Decode(ureq::Error::BodyExceedsLimit(10));
        assert!(err.source().is_some());
    }

    #[test]
    fn worker_gone_has_no_cause() {
        assert!(PlaygroundError::WorkerGone.source().is_none());
    }
}
