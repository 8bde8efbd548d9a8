mod get_test;
mod post_test;
