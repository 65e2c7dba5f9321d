pub mod account_table;
pub mod m202410180001_create_students;
pub mod m202410180002_create_instructors;
pub mod m202410180003_create_admins;
pub mod m202410180004_create_courses;
