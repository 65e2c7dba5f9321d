use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Permission class carried by every account document.
///
/// Each account collection stores exactly one of these, fixed at insert time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    #[sea_orm(string_value = "student")]
    Student,

    #[sea_orm(string_value = "instructor")]
    Instructor,

    #[sea_orm(string_value = "admin")]
    Admin,
}

impl Role {
    /// Capitalised form used in user-facing messages.
    pub fn title(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Instructor => "Instructor",
            Role::Admin => "Admin",
        }
    }
}
