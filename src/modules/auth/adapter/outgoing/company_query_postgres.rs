use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::Company;
use crate::auth::application::ports::outgoing::{CompanyQuery, CompanyQueryError};

use super::company_repository_postgres::CompanyRepositoryPostgres;
use super::sea_orm_entity::companies::{Column as CompanyColumn, Entity as CompanyEntity};

#[derive(Clone, Debug)]
pub struct CompanyQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CompanyQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map(
        model: Option<super::sea_orm_entity::companies::Model>,
    ) -> Result<Option<Company>, CompanyQueryError> {
        model
            .map(|m| {
                CompanyRepositoryPostgres::to_domain(m)
                    .map_err(|e| CompanyQueryError::DatabaseError(e.to_string()))
            })
            .transpose()
    }
}

#[async_trait]
impl CompanyQuery for CompanyQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, CompanyQueryError> {
        let model = CompanyEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| CompanyQueryError::DatabaseError(e.to_string()))?;

        Self::map(model)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Company>, CompanyQueryError> {
        let model = CompanyEntity::find()
            .filter(CompanyColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| CompanyQueryError::DatabaseError(e.to_string()))?;

        Self::map(model)
    }

    async fn find_by_verification_token(
        &self,
        token: &str,
    ) -> Result<Option<Company>, CompanyQueryError> {
        let model = CompanyEntity::find()
            .filter(CompanyColumn::VerificationToken.eq(token))
            .one(&*self.db)
            .await
            .map_err(|e| CompanyQueryError::DatabaseError(e.to_string()))?;

        Self::map(model)
    }

    async fn find_by_reset_token(
        &self,
        token: &str,
    ) -> Result<Option<Company>, CompanyQueryError> {
        let model = CompanyEntity::find()
            .filter(CompanyColumn::ResetToken.eq(token))
            .one(&*self.db)
            .await
            .map_err(|e| CompanyQueryError::DatabaseError(e.to_string()))?;

        Self::map(model)
    }
}
