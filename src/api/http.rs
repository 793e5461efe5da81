use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::snapshot::{AnalyticsSnapshot, LeagueRoster};
use crate::{Result, StatsError};


/// Base URL of a locally running analytics service.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Template roster set used when none is given.
pub const DEFAULT_TEMPLATE: &str = "leagues";

pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(concat!("league-stats/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Append path segments to `base`, keeping any path prefix it already has.
/// Segments are percent-encoded, so league names with spaces are safe.
pub fn endpoint_url(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| StatsError::UrlCannotBeBase {
            url: base.to_string(),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// `{base}/analysis/`
pub fn analysis_url(base: &str) -> Result<Url> {
    endpoint_url(base, &["analysis", ""])
}

/// `{base}/templates/{template}/leagues/{league}`
pub fn league_roster_url(base: &str, template: &str, league: &str) -> Result<Url> {
    endpoint_url(base, &["templates", template, "leagues", league])
}

async fn get_json(client: &Client, url: Url) -> Result<Value> {
    log::debug!("GET {}", url);
    let res = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;
    Ok(res)
}

/// Raw analysis payload. A `null` body means the service has no matches loaded.
pub async fn get_analysis(client: &Client, base: &str) -> Result<Value> {
    let value = get_json(client, analysis_url(base)?).await?;
    if value.is_null() {
        return Err(StatsError::NoData);
    }
    Ok(value)
}

pub async fn fetch_snapshot(client: &Client, base: &str) -> Result<AnalyticsSnapshot> {
    Ok(serde_json::from_value(get_analysis(client, base).await?)?)
}

pub async fn fetch_league_roster(
    client: &Client,
    base: &str,
    template: &str,
    league: &str,
) -> Result<LeagueRoster> {
    let value = get_json(client, league_roster_url(base, template, league)?).await?;
    Ok(serde_json::from_value(value)?)
}
