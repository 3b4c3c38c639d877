//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::AccountSummary;
use crate::domain::value_object::account_role::AccountRole;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role: AccountRole,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub account_id: Uuid,
    pub email: String,
    pub role: AccountRole,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<AccountSummary> for AccountResponse {
    fn from(summary: AccountSummary) -> Self {
        Self {
            account_id: summary.account_id.into_uuid(),
            email: summary.email,
            role: summary.role,
            last_login_at: summary.last_login_at,
            created_at: summary.created_at,
        }
    }
}
