use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::registry::application::domain::channel::{
    Channel, ChannelKind, ChannelStatus, ChannelType, EmployeeInfo, EmployeeVerificationStatus,
};
use crate::registry::application::ports::outgoing::{
    ChannelRepository, ChannelRepositoryError, StatusUpdate,
};

use super::sea_orm_entity::channels::{
    ActiveModel as ChannelActiveModel, Column as ChannelColumn, Entity as ChannelEntity,
    Model as ChannelModel,
};

#[derive(Clone, Debug)]
pub struct ChannelRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ChannelRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: ChannelModel) -> Result<Channel, ChannelRepositoryError> {
        let channel_type = ChannelType::parse(&model.channel_type).ok_or_else(|| {
            ChannelRepositoryError::DatabaseError(format!(
                "unknown channel type in row {}: {}",
                model.id, model.channel_type
            ))
        })?;
        let status = ChannelStatus::parse(&model.status).ok_or_else(|| {
            ChannelRepositoryError::DatabaseError(format!(
                "unknown status in row {}: {}",
                model.id, model.status
            ))
        })?;

        let kind = if model.is_employee_channel {
            let name = model.employee_name.clone().ok_or_else(|| {
                ChannelRepositoryError::DatabaseError(format!(
                    "employee channel {} has no employee_name",
                    model.id
                ))
            })?;
            let role = model.employee_role.clone().ok_or_else(|| {
                ChannelRepositoryError::DatabaseError(format!(
                    "employee channel {} has no employee_role",
                    model.id
                ))
            })?;
            let status = model
                .employee_status
                .as_deref()
                .and_then(EmployeeVerificationStatus::parse)
                .unwrap_or(EmployeeVerificationStatus::Pending);
            ChannelKind::Employee(EmployeeInfo {
                name,
                role,
                department: model.employee_department.clone(),
                status,
            })
        } else {
            ChannelKind::Company
        };

        Ok(Channel {
            id: model.id,
            company_id: model.company_id,
            channel_type,
            value: model.value,
            status,
            verified_at: model.verified_at.map(|t| t.with_timezone(&Utc)),
            description: model.description,
            kind,
            metadata: model.metadata.unwrap_or_else(|| serde_json::json!({})),
            created_at: model.created_at.with_timezone(&Utc),
        })
    }

    fn to_active(channel: &Channel) -> ChannelActiveModel {
        let (employee_name, employee_role, employee_department, employee_status) =
            match channel.kind.employee_info() {
                Some(info) => (
                    Some(info.name.clone()),
                    Some(info.role.clone()),
                    info.department.clone(),
                    Some(info.status.as_str().to_string()),
                ),
                None => (None, None, None, None),
            };

        ChannelActiveModel {
            id: Set(channel.id),
            company_id: Set(channel.company_id),
            channel_type: Set(channel.channel_type.as_str().to_string()),
            value: Set(channel.value.clone()),
            status: Set(channel.status.as_str().to_string()),
            verified_at: Set(channel.verified_at.map(Into::into)),
            description: Set(channel.description.clone()),
            is_employee_channel: Set(channel.kind.is_employee()),
            employee_name: Set(employee_name),
            employee_role: Set(employee_role),
            employee_department: Set(employee_department),
            employee_status: Set(employee_status),
            metadata: Set(Some(channel.metadata.clone())),
            created_at: Set(channel.created_at.into()),
            updated_at: Set(channel.created_at.into()),
        }
    }
}

#[async_trait]
impl ChannelRepository for ChannelRepositoryPostgres {
    async fn insert(&self, channel: Channel) -> Result<Channel, ChannelRepositoryError> {
        let inserted = Self::to_active(&channel)
            .insert(&*self.db)
            .await
            .map_err(|e| ChannelRepositoryError::DatabaseError(e.to_string()))?;

        Self::to_domain(inserted)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Channel>, ChannelRepositoryError> {
        let model = ChannelEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| ChannelRepositoryError::DatabaseError(e.to_string()))?;

        model.map(Self::to_domain).transpose()
    }

    async fn list_by_company(
        &self,
        company_id: Uuid,
    ) -> Result<Vec<Channel>, ChannelRepositoryError> {
        let models = ChannelEntity::find()
            .filter(ChannelColumn::CompanyId.eq(company_id))
            .order_by_asc(ChannelColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| ChannelRepositoryError::DatabaseError(e.to_string()))?;

        models.into_iter().map(Self::to_domain).collect()
    }

    async fn find_unverified_owned(
        &self,
        ids: &[Uuid],
        company_id: Uuid,
    ) -> Result<Vec<Channel>, ChannelRepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = ChannelEntity::find()
            .filter(ChannelColumn::Id.is_in(ids.iter().copied()))
            .filter(ChannelColumn::CompanyId.eq(company_id))
            .filter(ChannelColumn::Status.eq(ChannelStatus::Unverified.as_str()))
            .order_by_asc(ChannelColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| ChannelRepositoryError::DatabaseError(e.to_string()))?;

        models.into_iter().map(Self::to_domain).collect()
    }

    async fn update_status(
        &self,
        id: Uuid,
        update: StatusUpdate,
    ) -> Result<Channel, ChannelRepositoryError> {
        let model = ChannelEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| ChannelRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ChannelRepositoryError::ChannelNotFound)?;

        let current = ChannelStatus::parse(&model.status).ok_or_else(|| {
            ChannelRepositoryError::DatabaseError(format!(
                "unknown status in row {}: {}",
                model.id, model.status
            ))
        })?;

        // Verified and Failed are terminal; a verified record can only leave
        // the registry through delete + re-create.
        if current.is_terminal() {
            return Err(ChannelRepositoryError::InvalidTransition {
                from: current,
                to: update.status,
            });
        }

        let mut active: ChannelActiveModel = model.into();
        active.status = Set(update.status.as_str().to_string());
        active.verified_at = Set(update.verified_at.map(Into::into));
        active.metadata = Set(Some(update.metadata));

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| ChannelRepositoryError::DatabaseError(e.to_string()))?;

        Self::to_domain(updated)
    }

    async fn delete(&self, company_id: Uuid, id: Uuid) -> Result<(), ChannelRepositoryError> {
        ChannelEntity::delete_many()
            .filter(ChannelColumn::Id.eq(id))
            .filter(ChannelColumn::CompanyId.eq(company_id))
            .exec(&*self.db)
            .await
            .map_err(|e| ChannelRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::application::ports::outgoing::StatusUpdate;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(status: &str, verified_at: Option<chrono::DateTime<Utc>>) -> ChannelModel {
        let now = Utc::now();
        ChannelModel {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            channel_type: "website".to_string(),
            value: "acmecorp.com".to_string(),
            status: status.to_string(),
            verified_at: verified_at.map(Into::into),
            description: None,
            is_employee_channel: false,
            employee_name: None,
            employee_role: None,
            employee_department: None,
            employee_status: None,
            metadata: Some(serde_json::json!({ "source": "csv_upload" })),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn insert_maps_row_back_to_domain() {
        let stored = model("unverified", None);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![stored.clone()]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            .into_connection();

        let repository = ChannelRepositoryPostgres::new(Arc::new(db));
        let channel = ChannelRepositoryPostgres::to_domain(stored.clone()).unwrap();

        let result = repository.insert(channel).await.unwrap();

        assert_eq!(result.id, stored.id);
        assert_eq!(result.status, ChannelStatus::Unverified);
        assert_eq!(result.kind, ChannelKind::Company);
    }

    #[tokio::test]
    async fn update_status_refuses_terminal_records() {
        let verified = model("verified", Some(Utc::now()));
        let id = verified.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![verified]])
            .into_connection();

        let repository = ChannelRepositoryPostgres::new(Arc::new(db));

        let result = repository
            .update_status(
                id,
                StatusUpdate::failed(serde_json::json!({})),
            )
            .await;

        assert!(matches!(
            result,
            Err(ChannelRepositoryError::InvalidTransition {
                from: ChannelStatus::Verified,
                to: ChannelStatus::Failed,
            })
        ));
    }

    #[tokio::test]
    async fn update_status_unknown_id_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<ChannelModel>::new()])
            .into_connection();

        let repository = ChannelRepositoryPostgres::new(Arc::new(db));

        let result = repository
            .update_status(
                Uuid::new_v4(),
                StatusUpdate::verified(Utc::now(), serde_json::json!({})),
            )
            .await;

        assert!(matches!(
            result,
            Err(ChannelRepositoryError::ChannelNotFound)
        ));
    }

    #[tokio::test]
    async fn update_status_marks_unverified_record_verified() {
        let pending = model("unverified", None);
        let id = pending.id;
        let at = Utc::now();
        let mut after = pending.clone();
        after.status = "verified".to_string();
        after.verified_at = Some(at.into());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![pending]])
            .append_query_results(vec![vec![after]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repository = ChannelRepositoryPostgres::new(Arc::new(db));

        let updated = repository
            .update_status(id, StatusUpdate::verified(at, serde_json::json!({})))
            .await
            .unwrap();

        assert_eq!(updated.status, ChannelStatus::Verified);
        assert!(updated.verified_at.is_some());
    }

    #[tokio::test]
    async fn delete_of_missing_row_is_a_no_op() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repository = ChannelRepositoryPostgres::new(Arc::new(db));

        let result = repository.delete(Uuid::new_v4(), Uuid::new_v4()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn find_unverified_owned_short_circuits_on_empty_ids() {
        // No queries appended: hitting the database here would error.
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repository = ChannelRepositoryPostgres::new(Arc::new(db));

        let result = repository
            .find_unverified_owned(&[], Uuid::new_v4())
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn employee_rows_round_trip_through_the_kind_union() {
        let mut row = model("unverified", None);
        row.is_employee_channel = true;
        row.employee_name = Some("Jordan Kim".to_string());
        row.employee_role = Some("Support Lead".to_string());
        row.employee_status = Some("pending".to_string());

        let channel = ChannelRepositoryPostgres::to_domain(row).unwrap();
        let info = channel.kind.employee_info().expect("employee kind");
        assert_eq!(info.name, "Jordan Kim");
        assert_eq!(info.status, EmployeeVerificationStatus::Pending);

        let active = ChannelRepositoryPostgres::to_active(&channel);
        assert_eq!(active.is_employee_channel.clone().unwrap(), true);
        assert_eq!(
            active.employee_name.clone().unwrap(),
            Some("Jordan Kim".to_string())
        );
    }

    #[test]
    fn employee_row_without_name_is_rejected() {
        let mut row = model("unverified", None);
        row.is_employee_channel = true;
        row.employee_role = Some("Support Lead".to_string());

        let result = ChannelRepositoryPostgres::to_domain(row);

        assert!(matches!(
            result,
            Err(ChannelRepositoryError::DatabaseError(_))
        ));
    }
}
