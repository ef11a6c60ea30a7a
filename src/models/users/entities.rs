use serde::{Deserialize, Serialize};

use crate::models::persons::entities::Person;

// 用户实体（由外部认证系统维护，这里只读取）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_superuser: bool,
}

/// 请求方身份
///
/// 由 `ResolveIdentity` 中间件从 Bearer 令牌解析得到，匿名请求没有身份。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub user: User,
    pub person: Option<Person>,
}

impl Identity {
    pub fn user_id(&self) -> i64 {
        self.user.id
    }

    pub fn is_superuser(&self) -> bool {
        self.user.is_superuser
    }

    /// 姓和名都存在时显示全名，否则显示用户名
    pub fn display_name(&self) -> String {
        let user = &self.user;
        if !user.first_name.is_empty() && !user.last_name.is_empty() {
            format!("{} {}", user.first_name, user.last_name)
        } else {
            user.username.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(first: &str, last: &str) -> Identity {
        Identity {
            user: User {
                id: 7,
                username: "jdoe".to_string(),
                first_name: first.to_string(),
                last_name: last.to_string(),
                is_superuser: false,
            },
            person: None,
        }
    }

    #[test]
    fn test_display_name_prefers_full_name() {
        assert_eq!(identity("Jane", "Doe").display_name(), "Jane Doe");
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        assert_eq!(identity("Jane", "").display_name(), "jdoe");
        assert_eq!(identity("", "").display_name(), "jdoe");
    }
}
