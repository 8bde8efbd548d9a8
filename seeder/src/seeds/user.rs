use crate::seed::Seeder;
use db::models::user::{Model, Role};
use sea_orm::{DatabaseConnection, DbErr};

pub struct UserSeeder;

struct DemoUser {
    username: &'static str,
    password: &'static str,
    email: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    role: Role,
}

const USERS: [DemoUser; 3] = [
    DemoUser {
        username: "admin",
        password: "admin123",
        email: "admin@college.edu",
        first_name: "System",
        last_name: "Administrator",
        role: Role::Admin,
    },
    DemoUser {
        username: "teacher1",
        password: "teacher123",
        email: "teacher@college.edu",
        first_name: "John",
        last_name: "Doe",
        role: Role::Teacher,
    },
    DemoUser {
        username: "student1",
        password: "student123",
        email: "student@college.edu",
        first_name: "Jane",
        last_name: "Smith",
        role: Role::Student,
    },
];

#[async_trait::async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        for user in &USERS {
            if Model::find_by_username(db, user.username).await?.is_some() {
                continue;
            }
            Model::create(
                db,
                user.username,
                user.email,
                user.first_name,
                user.last_name,
                user.password,
                user.role,
            )
            .await?;
        }
        Ok(())
    }
}
