use crate::config::FetchConfig;
use crate::net::{RequestFailure, Response};

// Loads an URL and returns the buffered response, or a RequestFailure when the
// transport fails or the server answers with a non-2xx status. No retries.
pub async fn fetch(url: &str, config: &FetchConfig) -> Result<Response, RequestFailure> {
    let mut builder = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .redirect(reqwest::redirect::Policy::limited(config.max_redirects));
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build()?;

    log::debug!("fetching {url}");
    let res = client.get(url).send().await?;

    // Fetch results
    let final_url = res.url().clone();
    let status = res.status().as_u16();
    let status_text = res.status().canonical_reason().unwrap_or("Unknown").to_string();
    let headers = res.headers().clone();

    // Fetch body. We don't do streaming yet
    let body = res.bytes().await?.to_vec();

    let response = Response {
        url: final_url,
        status,
        status_text,
        headers,
        body,
    };

    if !response.is_success() {
        log::warn!("{} answered {} {}", response.url, response.status, response.status_text);
        return Err(response.into_failure());
    }

    Ok(response)
}
