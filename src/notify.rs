use crate::api::{Error, REQUEST_TIMEOUT};
use crate::model;

use std::collections::HashMap;

pub fn notifier(notify_url: String, token: String) -> model::Notifier {
    model::Notifier { notify_url, token }
}

/// Push `message` through the notification webhook: a single bearer-token
/// form POST, 2xx means delivered. Delivery is best effort, retries are the
/// caller's problem.
pub async fn notify(notifier: &model::Notifier, message: &str) -> Result<(), Error> {
    let client = reqwest::ClientBuilder::new()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .or(Err(Error::InternalError))?;

    let form = HashMap::from([("message", message)]);

    client
        .post(&notifier.notify_url)
        .header(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", notifier.token),
        )
        .form(&form)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| Error::NotifyError(e.to_string()))
        .map(|_| ())
}

#[cfg(test)]
mod test {
    use super::{notifier, notify};

    #[tokio::test]
    async fn notify_connection_error() {
        let notifier = notifier("http://127.0.0.1:9".to_string(), "token".to_string());
        assert!(notify(&notifier, "message").await.is_err());
    }
}
