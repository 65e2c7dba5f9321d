use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, DatabaseConnection};
use serde::Serialize;

use crate::models::account::NewAccount;
use crate::models::key::{new_key, parse_key};
use crate::models::role::Role;

/// A registered instructor. Uploads files; never linked to a course by any endpoint.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "instructors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub phone: f64,
    /// Always `Role::Instructor`.
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a new document with a fresh id and the fixed `instructor` role.
    pub async fn create(db: &DatabaseConnection, account: NewAccount) -> Result<Self, DbErr> {
        ActiveModel {
            id: Set(new_key()),
            name: Set(account.name),
            email: Set(account.email),
            password: Set(account.password),
            phone: Set(account.phone),
            role: Set(Role::Instructor),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await
    }

    /// Looks a document up by id. A malformed id is an error, an unknown one is `None`.
    pub async fn find_by_key(db: &DatabaseConnection, key: &str) -> Result<Option<Self>, DbErr> {
        let id = parse_key(key)?;
        Entity::find_by_id(id).one(db).await
    }
}
