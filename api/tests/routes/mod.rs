mod admin;
mod auth;
mod guard_test;
mod health_test;
mod student;
mod teacher_test;
