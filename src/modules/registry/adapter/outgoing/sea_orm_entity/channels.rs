use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::companies;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "channels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub company_id: Uuid,
    pub channel_type: String,
    pub value: String,
    pub status: String,
    pub verified_at: Option<DateTimeWithTimeZone>,
    pub description: Option<String>,
    pub is_employee_channel: bool,
    pub employee_name: Option<String>,
    pub employee_role: Option<String>,
    pub employee_department: Option<String>,
    pub employee_status: Option<String>,
    pub metadata: Option<Json>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "companies::Entity",
        from = "Column::CompanyId",
        to = "companies::Column::Id"
    )]
    Company,
}

impl Related<companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}
