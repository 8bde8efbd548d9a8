mod catalogue_test;
mod exams_test;
mod fees_test;
mod notifications_test;
mod results_test;
mod users_test;
