use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::companies;
use crate::registry::application::domain::matcher::VerifiedChannel;
use crate::registry::application::ports::outgoing::{
    VerifiedChannelQuery, VerifiedChannelQueryError,
};

use super::sea_orm_entity::channels;

#[derive(Debug, FromQueryResult)]
struct VerifiedRow {
    channel_id: Uuid,
    company_id: Uuid,
    company_name: String,
    value: String,
}

/// Joins verified channels with their owning company's name, in insertion
/// order, which is the scan order the matcher relies on.
#[derive(Clone, Debug)]
pub struct VerifiedChannelQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VerifiedChannelQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VerifiedChannelQuery for VerifiedChannelQueryPostgres {
    async fn list_verified(&self) -> Result<Vec<VerifiedChannel>, VerifiedChannelQueryError> {
        let rows = channels::Entity::find()
            .select_only()
            .column_as(channels::Column::Id, "channel_id")
            .column_as(channels::Column::CompanyId, "company_id")
            .column_as(channels::Column::Value, "value")
            .column_as(companies::Column::Name, "company_name")
            .join(JoinType::InnerJoin, channels::Relation::Company.def())
            .filter(channels::Column::Status.eq("verified"))
            .order_by_asc(channels::Column::CreatedAt)
            .into_model::<VerifiedRow>()
            .all(&*self.db)
            .await
            .map_err(|e| VerifiedChannelQueryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| VerifiedChannel {
                channel_id: row.channel_id,
                company_id: row.company_id,
                company_name: row.company_name,
                value: row.value,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;

    fn mock_row(channel_id: Uuid, company_id: Uuid, name: &str, value: &str) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([
            ("channel_id", Value::from(channel_id)),
            ("company_id", Value::from(company_id)),
            ("company_name", Value::from(name)),
            ("value", Value::from(value)),
        ])
    }

    #[tokio::test]
    async fn maps_joined_rows_to_the_read_model() {
        let channel_id = Uuid::new_v4();
        let company_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                mock_row(channel_id, company_id, "Acme", "@AcmeCorp"),
                mock_row(Uuid::new_v4(), company_id, "Acme", "acmecorp.com"),
            ]])
            .into_connection();

        let query = VerifiedChannelQueryPostgres::new(Arc::new(db));

        let channels = query.list_verified().await.unwrap();

        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0].channel_id, channel_id);
        assert_eq!(channels[0].company_name, "Acme");
        assert_eq!(channels[1].value, "acmecorp.com");
    }

    #[tokio::test]
    async fn database_errors_are_wrapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([sea_orm::DbErr::Custom("connection refused".to_string())])
            .into_connection();

        let query = VerifiedChannelQueryPostgres::new(Arc::new(db));

        let result = query.list_verified().await;

        assert!(matches!(
            result,
            Err(VerifiedChannelQueryError::DatabaseError(msg)) if msg.contains("connection refused")
        ));
    }
}
