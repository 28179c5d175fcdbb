//! Which console modal is open, as a plain value
//!
//! At most one modal is open at a time. Owners hold a `ModalState` and pass
//! it where it is needed; opening a second modal replaces the first.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every modal the console can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalKind {
    // Security
    #[serde(rename = "enforce_2fa")]
    Enforce2fa,
    RevokeSession,
    RevokeAllSessions,
    AddIpRule,
    EditIpRule,
    DeleteIpRule,
    ConfirmIpAllowlistEnable,
    // Team
    InviteMember,
    BulkImport,
    MemberProfile,
    DateRangePicker,
    // Billing
    BuyCredits,
    UpdatePayment,
    EditBillingDetails,
    ChangePlan,
    SwitchBillingModel,
    // Developers
    CreateApiKey,
    RevokeApiKey,
    ApiKeyCreated,
    CreateWebhook,
    EditWebhook,
    DeleteWebhook,
    WebhookCreated,
    // Settings
    AdminTransfer,
    DeleteTeam,
    RequestDataExport,
    // Activity
    ActivityDetail,
}

impl ModalKind {
    pub const ALL: [ModalKind; 27] = [
        ModalKind::Enforce2fa,
        ModalKind::RevokeSession,
        ModalKind::RevokeAllSessions,
        ModalKind::AddIpRule,
        ModalKind::EditIpRule,
        ModalKind::DeleteIpRule,
        ModalKind::ConfirmIpAllowlistEnable,
        ModalKind::InviteMember,
        ModalKind::BulkImport,
        ModalKind::MemberProfile,
        ModalKind::DateRangePicker,
        ModalKind::BuyCredits,
        ModalKind::UpdatePayment,
        ModalKind::EditBillingDetails,
        ModalKind::ChangePlan,
        ModalKind::SwitchBillingModel,
        ModalKind::CreateApiKey,
        ModalKind::RevokeApiKey,
        ModalKind::ApiKeyCreated,
        ModalKind::CreateWebhook,
        ModalKind::EditWebhook,
        ModalKind::DeleteWebhook,
        ModalKind::WebhookCreated,
        ModalKind::AdminTransfer,
        ModalKind::DeleteTeam,
        ModalKind::RequestDataExport,
        ModalKind::ActivityDetail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModalKind::Enforce2fa => "enforce_2fa",
            ModalKind::RevokeSession => "revoke_session",
            ModalKind::RevokeAllSessions => "revoke_all_sessions",
            ModalKind::AddIpRule => "add_ip_rule",
            ModalKind::EditIpRule => "edit_ip_rule",
            ModalKind::DeleteIpRule => "delete_ip_rule",
            ModalKind::ConfirmIpAllowlistEnable => "confirm_ip_allowlist_enable",
            ModalKind::InviteMember => "invite_member",
            ModalKind::BulkImport => "bulk_import",
            ModalKind::MemberProfile => "member_profile",
            ModalKind::DateRangePicker => "date_range_picker",
            ModalKind::BuyCredits => "buy_credits",
            ModalKind::UpdatePayment => "update_payment",
            ModalKind::EditBillingDetails => "edit_billing_details",
            ModalKind::ChangePlan => "change_plan",
            ModalKind::SwitchBillingModel => "switch_billing_model",
            ModalKind::CreateApiKey => "create_api_key",
            ModalKind::RevokeApiKey => "revoke_api_key",
            ModalKind::ApiKeyCreated => "api_key_created",
            ModalKind::CreateWebhook => "create_webhook",
            ModalKind::EditWebhook => "edit_webhook",
            ModalKind::DeleteWebhook => "delete_webhook",
            ModalKind::WebhookCreated => "webhook_created",
            ModalKind::AdminTransfer => "admin_transfer",
            ModalKind::DeleteTeam => "delete_team",
            ModalKind::RequestDataExport => "request_data_export",
            ModalKind::ActivityDetail => "activity_detail",
        }
    }
}

impl fmt::Display for ModalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModalKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown modal '{}'", s))
    }
}

/// Closed, or exactly one open modal with its payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState<P> {
    Closed,
    Open { kind: ModalKind, payload: P },
}

impl<P> Default for ModalState<P> {
    fn default() -> Self {
        ModalState::Closed
    }
}

impl<P> ModalState<P> {
    /// Open `kind`, replacing whatever was open
    pub fn open(&mut self, kind: ModalKind, payload: P) {
        *self = ModalState::Open { kind, payload };
    }

    /// Close and hand back the payload of the modal that was open
    pub fn close(&mut self) -> Option<P> {
        match std::mem::replace(self, ModalState::Closed) {
            ModalState::Open { payload, .. } => Some(payload),
            ModalState::Closed => None,
        }
    }

    pub fn is_open(&self, kind: ModalKind) -> bool {
        self.active_kind() == Some(kind)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, ModalState::Closed)
    }

    pub fn active_kind(&self) -> Option<ModalKind> {
        match self {
            ModalState::Open { kind, .. } => Some(*kind),
            ModalState::Closed => None,
        }
    }

    pub fn payload(&self) -> Option<&P> {
        match self {
            ModalState::Open { payload, .. } => Some(payload),
            ModalState::Closed => None,
        }
    }
}
