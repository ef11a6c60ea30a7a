pub mod course;

pub use course::configure_course_routes;
