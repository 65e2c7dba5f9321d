use std::{fs, path::Path};
use util::config;

mod runner;

#[tokio::main]
async fn main() {
    let url = config::database_url();
    let db_file = config::database_file();
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("clean") => {
            remove_db_file(db_file.as_deref());
            remove_uploads(&config::upload_dir());
        }
        Some("fresh") => {
            remove_db_file(db_file.as_deref());
            remove_uploads(&config::upload_dir());
            create_db_dir(db_file.as_deref());
            runner::run_all_migrations(&url).await;
        }
        _ => {
            create_db_dir(db_file.as_deref());
            runner::run_all_migrations(&url).await;
        }
    }
}

fn remove_db_file(db_file: Option<&Path>) {
    let Some(db_path) = db_file else {
        println!("DATABASE_PATH is a connection URL; leaving the database in place");
        return;
    };
    if db_path.exists() {
        fs::remove_file(db_path).expect("Failed to delete DB file");
        println!("Deleted DB: {}", db_path.display());
    } else {
        println!("DB file does not exist: {}", db_path.display());
    }
}

fn remove_uploads(dir: &str) {
    let upload_path = Path::new(dir);
    if upload_path.exists() {
        fs::remove_dir_all(upload_path).expect("Failed to delete uploaded files");
        println!("Deleted uploads: {}", upload_path.display());
    } else {
        println!("Upload directory does not exist: {}", upload_path.display());
    }
}

fn create_db_dir(db_file: Option<&Path>) {
    if let Some(parent) = db_file.and_then(Path::parent) {
        fs::create_dir_all(parent).expect("Failed to create DB directory");
    }
}
