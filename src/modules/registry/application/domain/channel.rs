use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed set of channel kinds a company can register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelType {
    X,
    Telegram,
    Website,
    Email,
    Phone,
}

impl ChannelType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "x" => Some(Self::X),
            "telegram" => Some(Self::Telegram),
            "website" => Some(Self::Website),
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Telegram => "telegram",
            Self::Website => "website",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelStatus {
    Unverified,
    Verified,
    Failed,
}

impl ChannelStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "unverified" => Some(Self::Unverified),
            "verified" => Some(Self::Verified),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unverified => "unverified",
            Self::Verified => "verified",
            Self::Failed => "failed",
        }
    }

    /// Verified and Failed are terminal; a record never leaves them.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Unverified)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeVerificationStatus {
    Pending,
    Verified,
    Rejected,
}

impl EmployeeVerificationStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "verified" => Some(Self::Verified),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInfo {
    pub name: String,
    pub role: String,
    pub department: Option<String>,
    pub status: EmployeeVerificationStatus,
}

/// A channel either belongs to the company itself or to one of its
/// employees, in which case the employee details are mandatory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelKind {
    Company,
    Employee(EmployeeInfo),
}

impl ChannelKind {
    pub fn is_employee(&self) -> bool {
        matches!(self, Self::Employee(_))
    }

    pub fn employee_info(&self) -> Option<&EmployeeInfo> {
        match self {
            Self::Company => None,
            Self::Employee(info) => Some(info),
        }
    }
}

/// Raised when a status change would move a record out of a terminal state
/// or break the verified/verified_at coupling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTransitionError {
    pub from: ChannelStatus,
    pub to: ChannelStatus,
}

impl std::fmt::Display for StatusTransitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid channel status transition: {} -> {}",
            self.from.as_str(),
            self.to.as_str()
        )
    }
}

impl std::error::Error for StatusTransitionError {}

/// One registered point of contact claimed by a company.
///
/// Invariants:
/// - `status == Verified` iff `verified_at` is set
/// - once Verified or Failed, the status never changes again; re-verifying
///   a failed record means removing it and importing it again
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub id: Uuid,
    pub company_id: Uuid,
    pub channel_type: ChannelType,
    pub value: String,
    pub status: ChannelStatus,
    pub verified_at: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub kind: ChannelKind,
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl Channel {
    pub fn new_unverified(
        company_id: Uuid,
        channel_type: ChannelType,
        value: String,
        description: Option<String>,
        kind: ChannelKind,
        metadata: serde_json::Value,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            company_id,
            channel_type,
            value,
            status: ChannelStatus::Unverified,
            verified_at: None,
            description,
            kind,
            metadata,
            created_at: Utc::now(),
        }
    }

    pub fn mark_verified(&mut self, at: DateTime<Utc>) -> Result<(), StatusTransitionError> {
        if self.status.is_terminal() {
            return Err(StatusTransitionError {
                from: self.status,
                to: ChannelStatus::Verified,
            });
        }
        self.status = ChannelStatus::Verified;
        self.verified_at = Some(at);
        Ok(())
    }

    pub fn mark_failed(&mut self) -> Result<(), StatusTransitionError> {
        if self.status.is_terminal() {
            return Err(StatusTransitionError {
                from: self.status,
                to: ChannelStatus::Failed,
            });
        }
        self.status = ChannelStatus::Failed;
        self.verified_at = None;
        Ok(())
    }
}
