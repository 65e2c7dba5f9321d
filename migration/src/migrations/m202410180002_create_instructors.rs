use sea_orm_migration::prelude::*;

use super::account_table;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202410180002_create_instructors"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(account_table::create("instructors")).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(account_table::drop("instructors")).await
    }
}
