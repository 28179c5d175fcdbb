//! Team member model

use super::record::Record;
use super::value::FieldValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Team role as displayed ("Account Manager", "Developer", ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamRole {
    #[serde(rename = "Account Manager")]
    AccountManager,
    Developer,
    Sales,
    Custom,
    Designer,
    Member,
}

impl TeamRole {
    pub fn label(&self) -> &'static str {
        match self {
            TeamRole::AccountManager => "Account Manager",
            TeamRole::Developer => "Developer",
            TeamRole::Sales => "Sales",
            TeamRole::Custom => "Custom",
            TeamRole::Designer => "Designer",
            TeamRole::Member => "Member",
        }
    }

    /// URL/filter form: lower case, spaces replaced by dashes
    pub fn slug(&self) -> &'static str {
        match self {
            TeamRole::AccountManager => "account-manager",
            TeamRole::Developer => "developer",
            TeamRole::Sales => "sales",
            TeamRole::Custom => "custom",
            TeamRole::Designer => "designer",
            TeamRole::Member => "member",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Pending,
    Suspended,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Pending => "pending",
            UserStatus::Suspended => "suspended",
            UserStatus::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: TeamRole,
    #[serde(default)]
    pub custom_role_name: Option<String>,
    pub status: UserStatus,
    /// Display text such as `Mar 2024`
    pub joined_at: String,
    pub last_active_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub two_factor_enabled: bool,
    #[serde(default)]
    pub active_sessions: u32,
    #[serde(default)]
    pub assets_created: u32,
}

impl Record for Member {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "role" => self.role.slug().into(),
            "roleLabel" => self
                .custom_role_name
                .as_deref()
                .unwrap_or(self.role.label())
                .into(),
            "status" => self.status.as_str().into(),
            "joinedAt" => self.joined_at.as_str().into(),
            "lastActiveAt" => self.last_active_at.into(),
            "twoFactorEnabled" => {
                if self.two_factor_enabled {
                    "yes".into()
                } else {
                    "no".into()
                }
            }
            "activeSessions" => self.active_sessions.into(),
            "assetsCreated" => self.assets_created.into(),
            _ => FieldValue::Null,
        }
    }
}
