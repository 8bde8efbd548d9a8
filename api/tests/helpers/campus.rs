use chrono::NaiveDate;
use db::models::{
    class::{self, NewClass},
    course, department,
    student::{self, NewStudent},
    subject,
    teacher::{self, EmploymentType, NewTeacher, Qualification},
    user::{self, Role},
};
use db::test_utils::setup_test_db;
use sea_orm::DatabaseConnection;

/// One department with an admin, a teacher, and a student enrolled in a
/// class taking one course.
#[allow(dead_code)]
pub struct Campus {
    pub db: DatabaseConnection,
    pub department: department::Model,
    pub admin: user::Model,
    pub teacher_user: user::Model,
    pub teacher: teacher::Model,
    pub student_user: user::Model,
    pub student: student::Model,
    pub class: class::Model,
    pub course: course::Model,
    pub subject: subject::Model,
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub async fn seed_campus() -> Campus {
    let db = setup_test_db().await;

    let department = department::Model::create(&db, "Computer Science", "CS", None, "")
        .await
        .unwrap();

    let admin = user::Model::create(
        &db,
        "admin",
        "admin@college.edu",
        "System",
        "Administrator",
        "admin123",
        Role::Admin,
    )
    .await
    .unwrap();

    let teacher_user = user::Model::create(
        &db,
        "teacher1",
        "teacher1@college.edu",
        "John",
        "Doe",
        "teacher123",
        Role::Teacher,
    )
    .await
    .unwrap();

    let teacher = teacher::Model::create(
        &db,
        NewTeacher {
            user_id: teacher_user.id,
            employee_id: "EMP001".into(),
            department_id: department.id,
            designation: "Assistant Professor".into(),
            qualification: Qualification::Master,
            specialization: "Software Engineering".into(),
            experience_years: 5,
            employment_type: EmploymentType::Permanent,
            joining_date: date(2020, 1, 1),
            salary: Some("50000.00".parse().unwrap()),
            office_room: String::new(),
            office_hours: String::new(),
        },
    )
    .await
    .unwrap();

    let mut new_class = NewClass::new("CS Semester 1 A", department.id, 1, "2024-2025");
    new_class.class_teacher_id = Some(teacher_user.id);
    let class = class::Model::create(&db, new_class).await.unwrap();

    let student_user = user::Model::create(
        &db,
        "student1",
        "student1@college.edu",
        "Jane",
        "Smith",
        "student123",
        Role::Student,
    )
    .await
    .unwrap();

    let student = student::Model::create(
        &db,
        NewStudent {
            user_id: student_user.id,
            roll_number: "CS001".into(),
            admission_number: "ADM2024001".into(),
            class_id: Some(class.id),
            department_id: department.id,
            admission_date: date(2024, 1, 1),
            guardian_name: "Robert Smith".into(),
            guardian_phone: "9876543210".into(),
            emergency_contact: "9876543210".into(),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let course = course::Model::create(
        &db,
        "Programming Fundamentals",
        "CS101",
        department.id,
        1,
        4,
        "",
    )
    .await
    .unwrap();

    let subject = subject::Model::create(&db, course.id, class.id, Some(teacher_user.id))
        .await
        .unwrap();

    Campus {
        db,
        department,
        admin,
        teacher_user,
        teacher,
        student_user,
        student,
        class,
        course,
        subject,
    }
}

/// A student account with a profile but no class.
pub async fn unassigned_student(campus: &Campus, username: &str, roll: &str) -> user::Model {
    let account = user::Model::create(
        &campus.db,
        username,
        &format!("{username}@college.edu"),
        "",
        "",
        "password123",
        Role::Student,
    )
    .await
    .unwrap();

    student::Model::create(
        &campus.db,
        NewStudent {
            user_id: account.id,
            roll_number: roll.into(),
            admission_number: format!("ADM-{roll}"),
            class_id: None,
            department_id: campus.department.id,
            admission_date: date(2024, 1, 1),
            guardian_name: "Guardian".into(),
            guardian_phone: "123".into(),
            emergency_contact: "123".into(),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    account
}
