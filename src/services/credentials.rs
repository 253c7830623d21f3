use log::debug;

use crate::config::EnvConfig;
use crate::db::DatabaseManager;
use crate::types::account::Account;
use crate::types::error::AppError;

const VALIDATE_USER_PROC: &str = "ValidateUser";
const CREATE_CLIENT_PROC: &str = "dbo.CreateClient";

/// Translates one credential request into exactly one stored-routine call.
///
/// The resolved configuration is injected at construction; nothing here reads
/// ambient state per call.
#[derive(Clone)]
pub struct CredentialService {
    config: EnvConfig,
}

impl CredentialService {
    pub fn new(config: EnvConfig) -> Self {
        CredentialService { config }
    }

    fn open_database(&self) -> Result<DatabaseManager, AppError> {
        if self.config.database_url.is_empty() {
            return Err(AppError::Configuration(
                "connection string DATABASE_URL is not configured".into(),
            ));
        }
        DatabaseManager::new(&self.config.database_url)
    }

    /// Validates a credential pair against the `ValidateUser` routine.
    ///
    /// Default mode preserves the historical behavior: any non-erroring call
    /// counts as a successful login, even when the routine reports no matching
    /// user. `STRICT_VALIDATION` instead requires a positive match count.
    pub async fn login(&self, account: &Account) -> Result<bool, AppError> {
        if account.user_name.is_empty() || account.password.is_empty() {
            return Ok(false);
        }

        let mut db = self.open_database()?;
        let matched = db
            .execute_scalar::<i32>(
                VALIDATE_USER_PROC,
                vec![
                    ("UserName", account.user_name.clone().into()),
                    ("Password", account.password.clone().into()),
                ],
            )
            .await?;
        db.close().await?;

        if self.config.strict_validation {
            Ok(matched.unwrap_or(0) > 0)
        } else {
            Ok(true)
        }
    }

    /// Registers a credential pair through the `dbo.CreateClient` routine.
    /// Succeeds on any non-erroring call regardless of affected-row count.
    pub async fn register(&self, account: &Account) -> Result<bool, AppError> {
        if account.user_name.is_empty() || account.password.is_empty() {
            return Ok(false);
        }

        let mut db = self.open_database()?;
        let affected = db
            .execute_non_query(
                CREATE_CLIENT_PROC,
                vec![
                    ("UserName", account.user_name.clone().into()),
                    ("Password", account.password.clone().into()),
                ],
            )
            .await?;
        db.close().await?;

        debug!("CreateClient affected {} row(s)", affected);
        Ok(true)
    }
}
