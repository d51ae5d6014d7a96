/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Path the todo routes are mounted under (default: `/todos`).
    ///
    /// Always starts with `/` and never ends with one, except for the root
    /// itself.
    pub base_path: String,
    /// Externally visible origin used in item URLs, e.g. `https://todo.example.com`.
    /// When unset, the request's `Host` header is used.
    pub public_url: Option<String>,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Database URL (default: `sqlite://todos.db`).
    pub database_url: String,
    /// Database pool size (default: `5`). Ignored for in-memory databases.
    pub database_max_connections: u32,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default             |
    /// |----------------------------|---------------------|
    /// | `HOST`                     | `0.0.0.0`           |
    /// | `PORT`                     | `3000`              |
    /// | `API_BASE_PATH`            | `/todos`            |
    /// | `PUBLIC_URL`               | unset               |
    /// | `CORS_ORIGINS`             | `*`                 |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                |
    /// | `DATABASE_URL`             | `sqlite://todos.db` |
    /// | `DATABASE_MAX_CONNECTIONS` | `5`                 |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let base_path =
            normalize_base_path(&std::env::var("API_BASE_PATH").unwrap_or_else(|_| "/todos".into()));

        let public_url = std::env::var("PUBLIC_URL")
            .ok()
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://todos.db".into());

        let database_max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| todo_db::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32");

        Self {
            host,
            port,
            base_path,
            public_url,
            cors_origins,
            request_timeout_secs,
            database_url,
            database_max_connections,
        }
    }

    /// `true` when CORS should accept any origin.
    pub fn cors_allows_any(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

/// Normalize a mount path to `/segment[/segment...]`, or `/` for the root.
pub fn normalize_base_path(raw: &str) -> String {
    let segments: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}
