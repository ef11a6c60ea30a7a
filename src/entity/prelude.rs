//! 预导入模块，方便使用

pub use super::assignment_files::Entity as AssignmentFiles;
pub use super::assignment_urls::Entity as AssignmentUrls;
pub use super::assignments::Entity as Assignments;
pub use super::enrollings::Entity as Enrollings;
pub use super::file_materials::Entity as FileMaterials;
pub use super::grades::Entity as Grades;
pub use super::instructions::Entity as Instructions;
pub use super::objections::Entity as Objections;
pub use super::persons::Entity as Persons;
pub use super::questions::Entity as Questions;
pub use super::semesters::Entity as Semesters;
pub use super::session_files::Entity as SessionFiles;
pub use super::session_urls::Entity as SessionUrls;
pub use super::sessions::Entity as Sessions;
pub use super::submissions::Entity as Submissions;
pub use super::teaching_assistings::Entity as TeachingAssistings;
pub use super::url_materials::Entity as UrlMaterials;
pub use super::users::Entity as Users;
