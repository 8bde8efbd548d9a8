pub mod m202410010001_create_users;
pub mod m202410010002_create_departments;
pub mod m202410010003_create_courses;
pub mod m202410010004_create_classes;
pub mod m202410010005_create_subjects;
pub mod m202410010006_create_timetables;
pub mod m202410010007_create_profiles;
pub mod m202410010008_create_attendance;
pub mod m202410010009_create_exams;
pub mod m202410010010_create_fees;
pub mod m202410010011_create_notifications;
