/// Fields accepted when registering a student, instructor or admin.
///
/// The role is never part of this: each collection assigns its own.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    /// Stored as given.
    pub password: String,
    pub phone: f64,
}
