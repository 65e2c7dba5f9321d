use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202410180001_create_students::Migration),
            Box::new(migrations::m202410180002_create_instructors::Migration),
            Box::new(migrations::m202410180003_create_admins::Migration),
            Box::new(migrations::m202410180004_create_courses::Migration),
        ]
    }
}
