use chrono::Utc;
use contracts::domain::order::{Order, OrderDraft, OrderPatch};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, QueryOrder, Set};
use uuid::Uuid;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub customer_name: String,
    /// References services.name by value. No foreign key.
    pub service_name: String,
    pub notes: Option<String>,
    pub status: String,
    pub archived: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Order {
    fn from(m: Model) -> Self {
        Order {
            id: m.id,
            customer_name: m.customer_name,
            service_name: m.service_name,
            notes: m.notes,
            timestamp: m.created_at.unwrap_or_else(Utc::now),
            archived: m.archived,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// All rows, newest first.
pub async fn list_all() -> anyhow::Result<Vec<Order>> {
    let items = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<Order>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(draft: &OrderDraft) -> anyhow::Result<Order> {
    let now = Utc::now();
    let active = ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        customer_name: Set(draft.customer_name.clone()),
        service_name: Set(draft.service_name.clone()),
        notes: Set(draft.notes.clone()),
        status: Set("pending".to_string()),
        archived: Set(false),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
    };
    let model = active.insert(conn()).await?;
    Ok(model.into())
}

pub async fn update_partial(id: &str, patch: &OrderPatch) -> anyhow::Result<Option<Order>> {
    let active = ActiveModel {
        id: Set(id.to_string()),
        customer_name: patch.customer_name.clone().map(Set).unwrap_or(NotSet),
        service_name: patch.service_name.clone().map(Set).unwrap_or(NotSet),
        notes: patch.notes.clone().map(|n| Set(Some(n))).unwrap_or(NotSet),
        status: NotSet,
        archived: patch.archived.map(Set).unwrap_or(NotSet),
        created_at: NotSet,
        updated_at: Set(Some(Utc::now())),
    };
    match active.update(conn()).await {
        Ok(model) => Ok(Some(model.into())),
        Err(DbErr::RecordNotFound(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub async fn delete(id: &str) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
