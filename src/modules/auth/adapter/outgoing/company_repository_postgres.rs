use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Company, SubscriptionStatus};
use crate::auth::application::ports::outgoing::{CompanyRepository, CompanyRepositoryError};

use super::sea_orm_entity::companies::{
    ActiveModel as CompanyActiveModel, Entity as CompanyEntity, Model as CompanyModel,
};

#[derive(Clone, Debug)]
pub struct CompanyRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CompanyRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub(crate) fn to_domain(model: CompanyModel) -> Result<Company, CompanyRepositoryError> {
        let subscription_status = SubscriptionStatus::parse(&model.subscription_status)
            .ok_or_else(|| {
                CompanyRepositoryError::DatabaseError(format!(
                    "unknown subscription status in row {}: {}",
                    model.id, model.subscription_status
                ))
            })?;

        Ok(Company {
            id: model.id,
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
            is_verified: model.is_verified,
            verification_token: model.verification_token,
            verification_token_expires: model
                .verification_token_expires
                .map(|t| t.with_timezone(&Utc)),
            reset_token: model.reset_token,
            reset_token_expires: model.reset_token_expires.map(|t| t.with_timezone(&Utc)),
            subscription_status,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        })
    }

    async fn load(&self, id: Uuid) -> Result<CompanyModel, CompanyRepositoryError> {
        CompanyEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| CompanyRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(CompanyRepositoryError::CompanyNotFound)
    }
}

#[async_trait]
impl CompanyRepository for CompanyRepositoryPostgres {
    async fn create_company(&self, company: Company) -> Result<Company, CompanyRepositoryError> {
        let active = CompanyActiveModel {
            id: Set(company.id),
            name: Set(company.name),
            email: Set(company.email),
            password_hash: Set(company.password_hash),
            is_verified: Set(company.is_verified),
            verification_token: Set(company.verification_token),
            verification_token_expires: Set(company.verification_token_expires.map(Into::into)),
            reset_token: Set(company.reset_token),
            reset_token_expires: Set(company.reset_token_expires.map(Into::into)),
            subscription_status: Set(company.subscription_status.as_str().to_string()),
            created_at: Set(company.created_at.into()),
            updated_at: Set(company.updated_at.into()),
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23505")
                || err_str.contains("duplicate key")
                || err_str.contains("unique constraint")
            {
                return CompanyRepositoryError::EmailAlreadyExists;
            }
            CompanyRepositoryError::DatabaseError(e.to_string())
        })?;

        Self::to_domain(inserted)
    }

    async fn activate_company(&self, id: Uuid) -> Result<Company, CompanyRepositoryError> {
        let model = self.load(id).await?;

        let mut active: CompanyActiveModel = model.into();
        active.is_verified = Set(true);
        active.verification_token = Set(None);
        active.verification_token_expires = Set(None);

        let activated = active
            .update(&*self.db)
            .await
            .map_err(|e| CompanyRepositoryError::DatabaseError(e.to_string()))?;

        Self::to_domain(activated)
    }

    async fn set_reset_token(
        &self,
        id: Uuid,
        token: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), CompanyRepositoryError> {
        let model = self.load(id).await?;

        let mut active: CompanyActiveModel = model.into();
        active.reset_token = Set(Some(token));
        active.reset_token_expires = Set(Some(expires_at.into()));

        active
            .update(&*self.db)
            .await
            .map_err(|e| CompanyRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn update_password(
        &self,
        id: Uuid,
        new_password_hash: String,
    ) -> Result<(), CompanyRepositoryError> {
        let model = self.load(id).await?;

        let mut active: CompanyActiveModel = model.into();
        active.password_hash = Set(new_password_hash);
        active.reset_token = Set(None);
        active.reset_token_expires = Set(None);

        active
            .update(&*self.db)
            .await
            .map_err(|e| CompanyRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
