#[macro_use]
extern crate lazy_static;

use config::Config;
use youbike_rs::api;
use youbike_rs::notify;

const API_URL: &str = "https://apis.youbike.com.tw";
const NOTIFY_URL: &str = "https://notify-api.line.me/api/notify";
/* Leading newline in the final message keeps the header off the row that
 * carries the sender name in the chat client. */
const MESSAGE_HEADER: &str = "YouBike站點可借車輛數量:";

lazy_static! {
    /// Stations worth notifying about, exact display names as served by the
    /// station API.
    static ref TARGET_STATIONS: Vec<&'static str> = vec![
        "捷運忠孝新生站(3號出口)",
        "捷運忠孝新生站(4號出口)",
        "捷運忠孝新生站(2號出口)",
        "捷運忠孝新生站(1號出口)",
        "捷運忠孝復興站(2號出口)",
        "忠孝東路四段49巷口",
        "捷運忠孝復興站(3號出口)",
        "信義大安路口(信維大樓)",
        "敦化信義路口(東南側)",
        "信義敦化路口",
    ];
}

#[derive(Clone, serde::Deserialize)]
pub struct YoubikeConfig {
    api_url: String,
    notify_url: String,
    line_token: String,
}

pub fn read_settings() -> YoubikeConfig {
    let mut settings = Config::default();
    settings
        .merge(config::Environment::with_prefix("YOUBIKE"))
        .unwrap()
        .set_default("api_url", API_URL)
        .unwrap()
        .set_default("notify_url", NOTIFY_URL)
        .unwrap();

    settings.try_into().expect("Configuration error")
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let settings = read_settings();
    let api = api::api(settings.api_url);
    let notifier = notify::notifier(settings.notify_url, settings.line_token);

    log::info!("fetching YouBike station availability");
    let lines = api::fetch(&api, TARGET_STATIONS.as_slice()).await;

    if lines.is_empty() {
        log::info!("no matching station data this cycle, skipping notification");
        return;
    }

    let message = format!("\n{}\n{}", MESSAGE_HEADER, lines.join("\n"));
    match notify::notify(&notifier, &message).await {
        Ok(()) => log::info!("notification delivered"),
        Err(e) => log::warn!("notification delivery failed: {:?}", e),
    }
}
