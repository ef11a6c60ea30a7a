pub mod jwt;
pub mod validate;

pub use jwt::JwtUtils;
