use chrono::Utc;
use contracts::domain::site_settings::{SiteSettings, SiteSettingsPatch};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};
use uuid::Uuid;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "site_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub description: String,
    pub order_notice: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SiteSettings {
    fn from(m: Model) -> Self {
        SiteSettings {
            title: m.title,
            description: m.description,
            order_notice: m.order_notice,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

async fn first_row() -> anyhow::Result<Option<Model>> {
    let row = Entity::find().one(conn()).await?;
    Ok(row)
}

/// Fetch the singleton row, seeding the default copy on first access.
pub async fn get_or_create() -> anyhow::Result<SiteSettings> {
    if let Some(row) = first_row().await? {
        return Ok(row.into());
    }

    let defaults = SiteSettings::default();
    let now = Utc::now();
    let active = ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        title: Set(defaults.title.clone()),
        description: Set(defaults.description.clone()),
        order_notice: Set(defaults.order_notice.clone()),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
    };
    let model = active.insert(conn()).await?;
    Ok(model.into())
}

/// Sparse update of the singleton row; creates it first when missing.
pub async fn update(patch: &SiteSettingsPatch) -> anyhow::Result<SiteSettings> {
    let existing = match first_row().await? {
        Some(row) => row,
        None => {
            get_or_create().await?;
            first_row()
                .await?
                .ok_or_else(|| anyhow::anyhow!("site_settings row vanished after seed"))?
        }
    };

    let active = ActiveModel {
        id: Set(existing.id),
        title: patch.title.clone().map(Set).unwrap_or(NotSet),
        description: patch.description.clone().map(Set).unwrap_or(NotSet),
        order_notice: patch.order_notice.clone().map(Set).unwrap_or(NotSet),
        created_at: NotSet,
        updated_at: Set(Some(Utc::now())),
    };
    let model = active.update(conn()).await?;
    Ok(model.into())
}
