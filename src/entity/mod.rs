//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod assignment_files;
pub mod assignment_urls;
pub mod assignments;
pub mod enrollings;
pub mod file_materials;
pub mod grades;
pub mod instructions;
pub mod objections;
pub mod persons;
pub mod questions;
pub mod semesters;
pub mod session_files;
pub mod session_urls;
pub mod sessions;
pub mod submissions;
pub mod teaching_assistings;
pub mod url_materials;
pub mod users;
