use std::env;

const DEV_JWT_SECRET: &str = "development_secret_key_change_in_production";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub server_host: String,
    pub server_port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub is_production: bool,
    /// Insert demo rooms on startup when the database is empty
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let is_production = env::var("QUIZ_ENV")
            .map(|v| v.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) => {
                if is_production && secret.len() < 32 {
                    anyhow::bail!("JWT_SECRET must be at least 32 characters in production");
                }
                secret
            }
            Err(_) => {
                if is_production {
                    anyhow::bail!("JWT_SECRET environment variable must be set in production");
                }
                tracing::warn!("Using default JWT secret. Set JWT_SECRET in production!");
                DEV_JWT_SECRET.to_string()
            }
        };

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| anyhow::anyhow!("SERVER_PORT must be a number: {}", e))?;

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:quiz_arena.db".to_string()),
            jwt_secret,
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port,
            cors_allowed_origins: parse_origins(env::var("CORS_ALLOWED_ORIGINS").ok().as_deref()),
            is_production,
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(!is_production),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_origins(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(origins) => origins
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        None => vec![
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins(Some("https://a.example, https://b.example ,")),
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(parse_origins(None).len(), 2);
    }
}
