use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveValue::Set, DatabaseBackend, DatabaseConnection, FromJsonQueryResult, Order, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::models::key::{new_key, parse_key};

/// A purchasable course.
///
/// `students` and `instructor` are plain identifier references into the
/// student and instructor collections. Nothing checks that they resolve,
/// and removing a student would leave its id behind here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Course name.
    pub course: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub price: f64,
    /// Student ids in purchase order. Append-only, duplicates kept.
    #[sea_orm(column_type = "Json")]
    pub students: StudentIds,
    /// Never set by any endpoint.
    pub instructor: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// JSON array of student ids stored inline on the course document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct StudentIds(pub Vec<String>);

impl StudentIds {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse {
    pub course: String,
    pub description: Option<String>,
    pub price: f64,
}

impl Model {
    /// Inserts a course with no students and no instructor.
    pub async fn create(db: &DatabaseConnection, new: NewCourse) -> Result<Self, DbErr> {
        ActiveModel {
            id: Set(new_key()),
            course: Set(new.course),
            description: Set(new.description),
            price: Set(new.price),
            students: Set(StudentIds::default()),
            instructor: Set(None),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await
    }

    /// Every course in insertion order. No filtering or paging.
    ///
    /// SQLite orders by `rowid`, which only grows since courses are never
    /// deleted; other backends fall back to `created_at`.
    pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        let query = Entity::find();
        let query = match db.get_database_backend() {
            DatabaseBackend::Sqlite => query.order_by(Expr::cust("rowid"), Order::Asc),
            _ => query.order_by_asc(Column::CreatedAt),
        };
        query.all(db).await
    }

    /// Looks a course up by id. A malformed id is an error, an unknown one is `None`.
    pub async fn find_by_key(db: &DatabaseConnection, key: &str) -> Result<Option<Self>, DbErr> {
        let id = parse_key(key)?;
        Entity::find_by_id(id).one(db).await
    }

    /// Appends `student_id` to the student list and returns the updated course.
    ///
    /// The append is a single `UPDATE` against the stored array, so
    /// concurrent purchases all land. There is no dedup: a student who buys
    /// twice appears twice.
    pub async fn add_student(&self, db: &DatabaseConnection, student_id: &str) -> Result<Self, DbErr> {
        let append = match db.get_database_backend() {
            DatabaseBackend::Sqlite => "json_insert(students, '$[#]', ?)",
            DatabaseBackend::Postgres => "(students::jsonb || jsonb_build_array(?::text))::json",
            _ => "JSON_ARRAY_APPEND(students, '$', ?)",
        };

        let result = Entity::update_many()
            .col_expr(Column::Students, Expr::cust_with_values(append, [student_id]))
            .filter(Column::Id.eq(self.id.as_str()))
            .exec(db)
            .await?;
        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!("course {}", self.id)));
        }

        Entity::find_by_id(self.id.as_str())
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("course {}", self.id)))
    }
}
