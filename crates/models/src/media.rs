use serde::{Deserialize, Serialize};

/// A file held by the external media store: the public URL plus the provider's id for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRef {
    pub url: String,
    pub public_id: String,
}

impl MediaRef {
    pub fn new(url: impl Into<String>, public_id: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            public_id: public_id.into(),
        }
    }

    /// Splits an optional reference into the (url, public id) column pair
    pub fn into_columns(media: Option<Self>) -> (Option<String>, Option<String>) {
        match media {
            Some(media) => (Some(media.url), Some(media.public_id)),
            None => (None, None),
        }
    }
}
