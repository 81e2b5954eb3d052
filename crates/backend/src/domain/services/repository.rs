use chrono::Utc;
use contracts::domain::service::{Service, ServiceDraft, ServicePatch};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, QueryOrder, Set};
use uuid::Uuid;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub price: String,
    pub order_index: i32,
    pub active: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Service {
    fn from(m: Model) -> Self {
        // Only the canonical columns exist remotely; the extended editor
        // fields come back empty after every reload.
        Service {
            id: m.id,
            name: m.name,
            price: m.price,
            order: m.order_index,
            active: m.active,
            description: None,
            category: None,
            features: Vec::new(),
            processing_time: None,
            featured: false,
            original_price: None,
            tags: Vec::new(),
            image_url: None,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// All rows ordered by display rank, then name for equal ranks.
pub async fn list_all() -> anyhow::Result<Vec<Service>> {
    let items = Entity::find()
        .order_by_asc(Column::OrderIndex)
        .order_by_asc(Column::Name)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<Service>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

/// Insert one row; id and timestamps are assigned here.
pub async fn insert(draft: &ServiceDraft) -> anyhow::Result<Service> {
    let now = Utc::now();
    let active = ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        name: Set(draft.name.clone()),
        price: Set(draft.price.clone()),
        order_index: Set(draft.order),
        active: Set(draft.active),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
    };
    let model = active.insert(conn()).await?;
    Ok(model.into())
}

/// Sparse update: only the provided fields become columns in the UPDATE.
/// Returns `None` when the id does not exist.
pub async fn update_partial(id: &str, patch: &ServicePatch) -> anyhow::Result<Option<Service>> {
    let active = ActiveModel {
        id: Set(id.to_string()),
        name: patch.name.clone().map(Set).unwrap_or(NotSet),
        price: patch.price.clone().map(Set).unwrap_or(NotSet),
        order_index: patch.order.map(Set).unwrap_or(NotSet),
        active: patch.active.map(Set).unwrap_or(NotSet),
        created_at: NotSet,
        updated_at: Set(Some(Utc::now())),
    };
    match active.update(conn()).await {
        Ok(model) => Ok(Some(model.into())),
        Err(DbErr::RecordNotFound(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Hard delete. `Ok(false)` for an unknown id.
pub async fn delete(id: &str) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
