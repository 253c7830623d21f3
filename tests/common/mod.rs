use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

use auth_api::config::EnvConfig;

pub mod client;

/// Spins up a disposable Postgres, runs the migrations, and hands back a
/// config pointing at it. Requires a local docker daemon.
pub struct TestContext {
    pub config: EnvConfig,
    _container: ContainerAsync<Postgres>,
}

impl TestContext {
    #[allow(dead_code)]
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        auth_api::db::migrate(&db_url)
            .await
            .expect("Failed to run migrations");

        TestContext {
            config: test_config(db_url),
            _container: container,
        }
    }
}

#[allow(dead_code)]
pub fn test_config(database_url: String) -> EnvConfig {
    EnvConfig {
        port: 8080,
        database_url,
        strict_validation: false,
    }
}

// Test data helpers
pub mod test_data {
    use auth_api::types::account::Account;

    #[allow(dead_code)]
    pub fn sample_account() -> Account {
        account("test-user", "hunter2")
    }

    #[allow(dead_code)]
    pub fn account(user_name: &str, password: &str) -> Account {
        Account {
            user_name: user_name.to_string(),
            password: password.to_string(),
        }
    }
}
