use async_trait::async_trait;
use uuid::Uuid;

use crate::registry::application::domain::channel::{
    Channel, ChannelKind, ChannelType, EmployeeInfo, EmployeeVerificationStatus,
};
use crate::registry::application::ports::outgoing::{ChannelRepository, ChannelRepositoryError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeInfoInput {
    pub name: String,
    pub role: String,
    pub department: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateChannelInput {
    pub channel_type: String,
    pub value: String,
    pub description: Option<String>,
    pub is_employee_channel: bool,
    pub employee_info: Option<EmployeeInfoInput>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CreateChannelError {
    InvalidType(String),
    EmptyValue,
    MissingEmployeeInfo(&'static str),
    RepositoryError(ChannelRepositoryError),
}

impl std::fmt::Display for CreateChannelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidType(t) => write!(f, "unknown channel type: {t}"),
            Self::EmptyValue => write!(f, "channel value cannot be empty"),
            Self::MissingEmployeeInfo(field) => {
                write!(f, "employee channel is missing required field: {field}")
            }
            Self::RepositoryError(e) => write!(f, "repository error: {e}"),
        }
    }
}

impl std::error::Error for CreateChannelError {}

impl CreateChannelInput {
    /// Schema validation shared by single creation and bulk import.
    pub fn validate(&self) -> Result<(ChannelType, String, ChannelKind), CreateChannelError> {
        let channel_type = ChannelType::parse(&self.channel_type)
            .ok_or_else(|| CreateChannelError::InvalidType(self.channel_type.clone()))?;

        let value = self.value.trim();
        if value.is_empty() {
            return Err(CreateChannelError::EmptyValue);
        }

        let kind = if self.is_employee_channel {
            let info = self
                .employee_info
                .as_ref()
                .ok_or(CreateChannelError::MissingEmployeeInfo("employee_info"))?;
            if info.name.trim().is_empty() {
                return Err(CreateChannelError::MissingEmployeeInfo("name"));
            }
            if info.role.trim().is_empty() {
                return Err(CreateChannelError::MissingEmployeeInfo("role"));
            }
            ChannelKind::Employee(EmployeeInfo {
                name: info.name.trim().to_string(),
                role: info.role.trim().to_string(),
                department: info.department.clone(),
                status: EmployeeVerificationStatus::Pending,
            })
        } else {
            ChannelKind::Company
        };

        Ok((channel_type, value.to_string(), kind))
    }
}

#[async_trait]
pub trait ICreateChannelUseCase: Send + Sync {
    async fn execute(
        &self,
        company_id: Uuid,
        input: CreateChannelInput,
    ) -> Result<Channel, CreateChannelError>;
}

#[derive(Debug, Clone)]
pub struct CreateChannelUseCase<R>
where
    R: ChannelRepository,
{
    repository: R,
}

impl<R> CreateChannelUseCase<R>
where
    R: ChannelRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICreateChannelUseCase for CreateChannelUseCase<R>
where
    R: ChannelRepository,
{
    async fn execute(
        &self,
        company_id: Uuid,
        input: CreateChannelInput,
    ) -> Result<Channel, CreateChannelError> {
        let (channel_type, value, kind) = input.validate()?;

        let channel = Channel::new_unverified(
            company_id,
            channel_type,
            value,
            input.description.clone(),
            kind,
            serde_json::json!({ "source": "dashboard" }),
        );

        self.repository
            .insert(channel)
            .await
            .map_err(CreateChannelError::RepositoryError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::application::domain::channel::ChannelStatus;
    use crate::registry::application::ports::outgoing::StatusUpdate;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockChannelRepository {
        inserted: Mutex<Vec<Channel>>,
        fail_insert: bool,
    }

    #[async_trait]
    impl ChannelRepository for MockChannelRepository {
        async fn insert(&self, channel: Channel) -> Result<Channel, ChannelRepositoryError> {
            if self.fail_insert {
                return Err(ChannelRepositoryError::DatabaseError(
                    "insert failed".to_string(),
                ));
            }
            self.inserted.lock().unwrap().push(channel.clone());
            Ok(channel)
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Channel>, ChannelRepositoryError> {
            unimplemented!()
        }

        async fn list_by_company(
            &self,
            _company_id: Uuid,
        ) -> Result<Vec<Channel>, ChannelRepositoryError> {
            unimplemented!()
        }

        async fn find_unverified_owned(
            &self,
            _ids: &[Uuid],
            _company_id: Uuid,
        ) -> Result<Vec<Channel>, ChannelRepositoryError> {
            unimplemented!()
        }

        async fn update_status(
            &self,
            _id: Uuid,
            _update: StatusUpdate,
        ) -> Result<Channel, ChannelRepositoryError> {
            unimplemented!()
        }

        async fn delete(
            &self,
            _company_id: Uuid,
            _id: Uuid,
        ) -> Result<(), ChannelRepositoryError> {
            unimplemented!()
        }
    }

    fn company_input() -> CreateChannelInput {
        CreateChannelInput {
            channel_type: "x".to_string(),
            value: "@AcmeCorp".to_string(),
            description: None,
            is_employee_channel: false,
            employee_info: None,
        }
    }

    #[tokio::test]
    async fn creates_unverified_channel() {
        let use_case = CreateChannelUseCase::new(MockChannelRepository::default());
        let company_id = Uuid::new_v4();

        let channel = use_case.execute(company_id, company_input()).await.unwrap();

        assert_eq!(channel.company_id, company_id);
        assert_eq!(channel.status, ChannelStatus::Unverified);
        assert!(channel.verified_at.is_none());
        assert_eq!(channel.value, "@AcmeCorp");
        assert_eq!(channel.kind, ChannelKind::Company);
    }

    #[tokio::test]
    async fn rejects_unknown_type() {
        let use_case = CreateChannelUseCase::new(MockChannelRepository::default());
        let input = CreateChannelInput {
            channel_type: "facebook".to_string(),
            ..company_input()
        };

        let result = use_case.execute(Uuid::new_v4(), input).await;

        assert!(matches!(result, Err(CreateChannelError::InvalidType(t)) if t == "facebook"));
    }

    #[tokio::test]
    async fn rejects_blank_value() {
        let use_case = CreateChannelUseCase::new(MockChannelRepository::default());
        let input = CreateChannelInput {
            value: "   ".to_string(),
            ..company_input()
        };

        let result = use_case.execute(Uuid::new_v4(), input).await;

        assert!(matches!(result, Err(CreateChannelError::EmptyValue)));
    }

    #[tokio::test]
    async fn employee_channel_requires_name_and_role() {
        let use_case = CreateChannelUseCase::new(MockChannelRepository::default());

        let missing_info = CreateChannelInput {
            is_employee_channel: true,
            employee_info: None,
            ..company_input()
        };
        assert!(matches!(
            use_case.execute(Uuid::new_v4(), missing_info).await,
            Err(CreateChannelError::MissingEmployeeInfo("employee_info"))
        ));

        let missing_role = CreateChannelInput {
            is_employee_channel: true,
            employee_info: Some(EmployeeInfoInput {
                name: "Jordan Kim".to_string(),
                role: "".to_string(),
                department: None,
            }),
            ..company_input()
        };
        assert!(matches!(
            use_case.execute(Uuid::new_v4(), missing_role).await,
            Err(CreateChannelError::MissingEmployeeInfo("role"))
        ));
    }

    #[tokio::test]
    async fn employee_channel_starts_with_pending_employee_status() {
        let use_case = CreateChannelUseCase::new(MockChannelRepository::default());
        let input = CreateChannelInput {
            is_employee_channel: true,
            employee_info: Some(EmployeeInfoInput {
                name: "Jordan Kim".to_string(),
                role: "Support Lead".to_string(),
                department: Some("Customer Success".to_string()),
            }),
            ..company_input()
        };

        let channel = use_case.execute(Uuid::new_v4(), input).await.unwrap();

        let info = channel.kind.employee_info().expect("employee channel");
        assert_eq!(info.status, EmployeeVerificationStatus::Pending);
        assert_eq!(info.name, "Jordan Kim");
    }

    #[tokio::test]
    async fn repository_failure_is_surfaced() {
        let repository = MockChannelRepository {
            fail_insert: true,
            ..Default::default()
        };
        let use_case = CreateChannelUseCase::new(repository);

        let result = use_case.execute(Uuid::new_v4(), company_input()).await;

        assert!(matches!(
            result,
            Err(CreateChannelError::RepositoryError(
                ChannelRepositoryError::DatabaseError(_)
            ))
        ));
    }
}
