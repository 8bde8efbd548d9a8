pub mod attendance;
pub mod class;
pub mod course;
pub mod department;
pub mod exam;
pub mod exam_result;
pub mod fee;
pub mod notification;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod time_slot;
pub mod timetable;
pub mod user;

pub use attendance::Entity as Attendance;
pub use class::Entity as Class;
pub use course::Entity as Course;
pub use department::Entity as Department;
pub use exam::Entity as Exam;
pub use exam_result::Entity as ExamResult;
pub use fee::Entity as Fee;
pub use notification::Entity as Notification;
pub use student::Entity as Student;
pub use subject::Entity as Subject;
pub use teacher::Entity as Teacher;
pub use time_slot::Entity as TimeSlot;
pub use timetable::Entity as Timetable;
pub use user::Entity as User;
