use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    /// Empty when DATABASE_URL is unset; the service reports a configuration
    /// error per request instead of refusing to start.
    pub database_url: String,
    /// Corrected login mode: require a positive match count from the
    /// validation routine instead of accepting any non-erroring call.
    pub strict_validation: bool,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database_url: env::var("DATABASE_URL").unwrap_or_default(),
            strict_validation: env::var("STRICT_VALIDATION")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}
