use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub backend_url: String,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(backendUrl: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            backend_url: backendUrl.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn upstream_url(&self, pathAndQuery: &str) -> String {
        format!("{}{}", self.backend_url, pathAndQuery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_url_joins_without_double_slash() {
        let state = AppState::new("http://backend:8000/", Duration::from_secs(5)).unwrap();
        assert_eq!(
            state.upstream_url("/api/status/?page=2"),
            "http://backend:8000/api/status/?page=2"
        );
    }
}
