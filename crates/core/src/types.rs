/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A `[latitude, longitude]` pair, in that order, as it travels on the wire.
pub type LatLng = [f64; 2];
