use serde::{Deserialize, Serialize};

/// Credential pair submitted on login and register. Lives only for the
/// duration of one request. Wire casing is `userName`/`password`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub user_name: String,
    pub password: String,
}
