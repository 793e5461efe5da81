//! Analytics service client
//!
//! - `http`: endpoint URLs and the two GET requests (snapshot, template roster)
//! - `load`: base URL resolution, snapshot files, and the on-disk snapshot cache

pub mod http;
pub mod load;

pub use http::{
    build_client, fetch_league_roster, fetch_snapshot, DEFAULT_API_URL, DEFAULT_TEMPLATE,
};
pub use load::{
    load_or_fetch_snapshot, load_or_fetch_snapshot_at, load_snapshot_file, resolve_api_url,
    CacheStatus,
};
