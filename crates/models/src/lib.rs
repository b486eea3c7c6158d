pub mod coerce;
pub mod media;
pub mod pagination;
pub mod sort;
