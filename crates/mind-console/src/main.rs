#![allow(non_snake_case)]

#[cfg(feature = "ssr")]
mod config {
    use serde::Deserialize;

    #[derive(Deserialize, Clone, Debug, Default)]
    #[serde(default)]
    pub struct Config {
        pub server: ServerConfig,
        pub backend: BackendConfig,
    }

    #[derive(Deserialize, Clone, Debug)]
    #[serde(default)]
    pub struct ServerConfig {
        pub bind: String,
        pub port: u16,
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                bind: "127.0.0.1".into(),
                port: 3000,
            }
        }
    }

    #[derive(Deserialize, Clone, Debug)]
    #[serde(default)]
    pub struct BackendConfig {
        pub url: String,
        pub timeout_secs: u64,
    }

    impl Default for BackendConfig {
        fn default() -> Self {
            Self {
                url: "http://127.0.0.1:8000".into(),
                timeout_secs: 30,
            }
        }
    }

    impl Config {
        pub fn listen_addr(&self) -> String {
            format!("{}:{}", self.server.bind, self.server.port)
        }
    }

    pub fn load(path: &str) -> Config {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("failed to parse config {path}: {e}, using defaults");
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("failed to read config {path}: {e}, using defaults");
                Config::default()
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn missing_sections_fall_back_to_defaults() {
            let config: Config = toml::from_str("[backend]\nurl = \"http://api:8000\"\n").unwrap();
            assert_eq!(config.backend.url, "http://api:8000");
            assert_eq!(config.backend.timeout_secs, 30);
            assert_eq!(config.listen_addr(), "127.0.0.1:3000");
        }

        #[test]
        fn unreadable_file_uses_defaults() {
            let config = load("/nonexistent/mind-status.toml");
            assert_eq!(config.server.port, 3000);
        }
    }
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::time::Duration;

    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use mind_api::AppState;
    use mind_ui::{shell, App};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let configPath = if let Some(idx) = args.iter().position(|a| a == "--config") {
        args.get(idx + 1)
            .cloned()
            .unwrap_or_else(|| "config.example.toml".into())
    } else {
        "config.example.toml".into()
    };

    let appConfig = config::load(&configPath);
    tracing::info!(
        "loaded config from {configPath}: listen={} backend={}",
        appConfig.listen_addr(),
        appConfig.backend.url
    );

    let appState = AppState::new(
        &appConfig.backend.url,
        Duration::from_secs(appConfig.backend.timeout_secs),
    )
    .expect("failed to build backend HTTP client");

    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let leptosOptions = conf.leptos_options;
    let routes = generate_route_list(App);

    // Pages render with LeptosOptions as state; the proxy carries its own.
    let app = Router::new()
        .leptos_routes(&leptosOptions, routes, {
            let leptosOptions = leptosOptions.clone();
            move || shell(leptosOptions.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .merge(mind_api::api_router(appState))
        .layer(TraceLayer::new_for_http());

    let addr = appConfig.listen_addr();
    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
