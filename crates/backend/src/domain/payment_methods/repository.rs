use chrono::Utc;
use contracts::domain::payment_method::{PaymentMethod, PaymentMethodDraft, PaymentMethodPatch};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, QueryOrder, Set};
use uuid::Uuid;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payment_methods")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub details: String,
    pub active: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PaymentMethod {
    fn from(m: Model) -> Self {
        PaymentMethod {
            id: m.id,
            name: m.name,
            details: m.details,
            active: m.active,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// All rows in creation order.
pub async fn list_all() -> anyhow::Result<Vec<PaymentMethod>> {
    let items = Entity::find()
        .order_by_asc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<PaymentMethod>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(draft: &PaymentMethodDraft) -> anyhow::Result<PaymentMethod> {
    let now = Utc::now();
    let active = ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        name: Set(draft.name.clone()),
        details: Set(draft.details.clone()),
        active: Set(draft.active),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
    };
    let model = active.insert(conn()).await?;
    Ok(model.into())
}

pub async fn update_partial(
    id: &str,
    patch: &PaymentMethodPatch,
) -> anyhow::Result<Option<PaymentMethod>> {
    let active = ActiveModel {
        id: Set(id.to_string()),
        name: patch.name.clone().map(Set).unwrap_or(NotSet),
        details: patch.details.clone().map(Set).unwrap_or(NotSet),
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

pub async fn delete(id: &str) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
