//! Students, instructors and admins share one document shape and differ
//! only in table name and the fixed role they carry.

use sea_orm_migration::prelude::*;

pub fn create(table: &str) -> TableCreateStatement {
    Table::create()
        .table(Alias::new(table))
        .if_not_exists()
        .col(ColumnDef::new(Alias::new("id")).string().not_null().primary_key())
        .col(ColumnDef::new(Alias::new("name")).string().not_null())
        .col(ColumnDef::new(Alias::new("email")).string().not_null())
        .col(ColumnDef::new(Alias::new("password")).string().not_null())
        .col(ColumnDef::new(Alias::new("phone")).double().not_null())
        .col(ColumnDef::new(Alias::new("role")).string().not_null())
        .col(
            ColumnDef::new(Alias::new("created_at"))
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::cust("CURRENT_TIMESTAMP")),
        )
        .to_owned()
}

pub fn drop(table: &str) -> TableDropStatement {
    Table::drop().table(Alias::new(table)).to_owned()
}
