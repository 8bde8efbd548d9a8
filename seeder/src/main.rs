use colored::*;
use migration::{Migrator, MigratorTrait};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to connect to database: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = Migrator::up(&db, None).await {
        eprintln!("Failed to apply migrations: {e}");
        return ExitCode::FAILURE;
    }

    match seeder::seed_all(&db).await {
        Ok(()) => {
            println!("{}", "Sample data ready.".green());
            println!("Demo users:");
            println!("  Admin:   admin/admin123");
            println!("  Teacher: teacher1/teacher123");
            println!("  Student: student1/student123");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Seeding failed: {e}");
            ExitCode::FAILURE
        }
    }
}
