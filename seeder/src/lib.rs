pub mod seed;
pub mod seeds;

use sea_orm::{DatabaseConnection, DbErr};

use seed::{Seeder, run_seeder};
use seeds::{
    class::ClassSeeder, course::CourseSeeder, department::DepartmentSeeder,
    student::StudentProfileSeeder, teacher::TeacherProfileSeeder, user::UserSeeder,
};

/// Runs every seeder in dependency order, stopping at the first failure.
pub async fn seed_all(db: &DatabaseConnection) -> Result<(), DbErr> {
    let seeders: [(Box<dyn Seeder + Send + Sync>, &str); 6] = [
        (Box::new(DepartmentSeeder), "Department"),
        (Box::new(UserSeeder), "User"),
        (Box::new(TeacherProfileSeeder), "TeacherProfile"),
        (Box::new(ClassSeeder), "Class"),
        (Box::new(StudentProfileSeeder), "StudentProfile"),
        (Box::new(CourseSeeder), "Course"),
    ];

    for (seeder, name) in seeders {
        run_seeder(&*seeder, name, db).await?;
    }
    Ok(())
}
