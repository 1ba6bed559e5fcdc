use reqwest::Url;

/// Side-channel for catalog query diagnostics.
///
/// The catalog provider reports the outgoing URL and the raw response body
/// here instead of logging them inline, so a presentation layer (or a test)
/// can capture them without the core depending on it.
pub trait QueryObserver: Send + Sync {
    fn on_request(&self, url: &str);
    fn on_response(&self, body: &str);
}

/// Default observer: forwards diagnostics to the tracing subscriber at debug
/// level.
pub struct TracingObserver;

impl QueryObserver for TracingObserver {
    fn on_request(&self, url: &str) {
        tracing::debug!(url = %url, "Outbound catalog query");
    }

    fn on_response(&self, body: &str) {
        tracing::debug!(response = %body, "Raw catalog response");
    }
}

/// Observer that drops everything.
pub struct NoopObserver;

impl QueryObserver for NoopObserver {
    fn on_request(&self, _url: &str) {}
    fn on_response(&self, _body: &str) {}
}

/// Renders a URL for the observer with the `api_key` query value masked.
/// Credentials must never reach the diagnostics channel.
pub fn observable_url(url: &Url) -> String {
    if url.query().is_none() {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "api_key" {
                "***".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();

    let mut masked = url.clone();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}
