use serde::Serialize;
use strum::{Display, EnumString};

/// Ordering applied to the public course list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString)]
pub enum CourseSort {
    #[strum(serialize = "price-asc")]
    PriceAsc,
    #[strum(serialize = "price-desc")]
    PriceDesc,
    /// Most recently created first
    #[default]
    #[strum(serialize = "newest")]
    Newest,
}

impl CourseSort {
    /// Resolves a raw `sort` query value; anything unrecognised falls back to newest-first
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}
