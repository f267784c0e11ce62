pub mod endpoint;
pub mod error;
pub mod response;

use crate::model;
pub use error::Error;
use response::StationList;

use std::time::Duration;

/* The station API rejects requests that do not look like they come from the
 * public station map page, so both headers are always sent. */
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const REFERER: &str = "https://www.youbike.com.tw/region/main/stations/";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub fn api(api_url: String) -> model::Api {
    model::Api { api_url }
}

/// Map non-200 API response to Error
fn map_api_err(error: reqwest::Error) -> Error {
    match error.status() {
        Some(http::StatusCode::FORBIDDEN) => Error::Rejected(error.to_string()),
        _ => Error::ApiError(error.to_string()),
    }
}

async fn get(api: &model::Api, endpoint: &endpoint::Endpoint) -> Result<String, Error> {
    let client = reqwest::ClientBuilder::new()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .or(Err(Error::InternalError))?;
    let url = format!("{}{}", api.api_url, endpoint);

    client
        .get(url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .header(reqwest::header::REFERER, REFERER)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(map_api_err)?
        .text()
        .await
        .map_err(|e| Error::ApiError(format!("Error reading API response: {}", e)))
}

/// Fetch and decode the full station list in upstream order.
pub async fn stations(api: &model::Api) -> Result<Vec<model::StationRecord>, Error> {
    let response_text = get(api, endpoint::STATIONS).await?;

    log::trace!("station list response_text: {}", response_text);

    serde_json::from_str::<StationList>(&response_text)
        .map_err(|e| Error::InvalidResponse(e.to_string(), response_text))
        .map(StationList::records)
}

/// Format one `"<name>: <spaces>"` line per record whose name is an exact
/// member of `targets`. Matching is case-sensitive with no normalization;
/// output keeps record order, not `targets` order.
pub fn filter_stations(records: &[model::StationRecord], targets: &[&str]) -> Vec<String> {
    records
        .iter()
        .filter(|record| targets.contains(&record.name.as_str()))
        .map(|record| format!("{}: {}", record.name, record.available_spaces))
        .collect()
}

/// One fetch cycle: request, decode, filter. Any upstream failure degrades
/// to an empty list; the error is logged and never reaches the caller.
pub async fn fetch(api: &model::Api, targets: &[&str]) -> Vec<String> {
    match stations(api).await {
        Ok(records) => filter_stations(&records, targets),
        Err(e) => {
            log::warn!("station fetch failed: {:?}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod test {
    use super::response::StationList;
    use super::{api, fetch, filter_stations};
    use crate::model::{Availability, StationRecord};

    fn records() -> Vec<StationRecord> {
        vec![
            StationRecord {
                name: "捷運忠孝新生站(3號出口)".to_string(),
                available_spaces: Availability::Spaces(5),
            },
            StationRecord {
                name: "Other Station".to_string(),
                available_spaces: Availability::Spaces(10),
            },
            StationRecord {
                name: "信義敦化路口".to_string(),
                available_spaces: Availability::Unavailable,
            },
        ]
    }

    #[test]
    fn filter_exact_match() {
        let lines = filter_stations(&records(), &["捷運忠孝新生站(3號出口)"]);
        assert_eq!(vec!["捷運忠孝新生站(3號出口): 5".to_string()], lines);
    }

    #[test]
    fn filter_empty_targets() {
        assert!(filter_stations(&records(), &[]).is_empty());
    }

    #[test]
    fn filter_no_partial_or_case_insensitive_match() {
        assert!(filter_stations(&records(), &["捷運忠孝新生站"]).is_empty());
        assert!(filter_stations(&records(), &["other station"]).is_empty());
    }

    #[test]
    fn filter_keeps_record_order() {
        /* targets listed in reverse; output follows record order */
        let lines = filter_stations(&records(), &["信義敦化路口", "捷運忠孝新生站(3號出口)"]);
        assert_eq!(
            vec![
                "捷運忠孝新生站(3號出口): 5".to_string(),
                "信義敦化路口: N/A".to_string(),
            ],
            lines
        );
    }

    #[test]
    fn decode_and_filter() {
        let payload = r#"{"retVal": {
            "1": {"name_tw": "捷運忠孝新生站(3號出口)", "available_spaces": 5},
            "2": {"name_tw": "Other Station", "available_spaces": 10}
        }}"#;

        let list: StationList = serde_json::from_str(payload).unwrap();
        let lines = filter_stations(&list.records(), &["捷運忠孝新生站(3號出口)"]);
        assert_eq!(vec!["捷運忠孝新生站(3號出口): 5".to_string()], lines);
    }

    #[tokio::test]
    async fn fetch_connection_error_degrades_to_empty() {
        /* nothing listens on the discard port */
        let api = api("http://127.0.0.1:9".to_string());
        assert!(fetch(&api, &["捷運忠孝新生站(3號出口)"]).await.is_empty());
    }
}
