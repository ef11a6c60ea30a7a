use crate::config::AppConfig;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

const ACCESS_TOKEN_TYPE: &str = "access";

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,        // Subject (user ID)
    pub token_type: String, // 只接受 "access"
    pub exp: usize,         // Expiration time (时间戳)
    pub iat: usize,         // Issued at (签发时间)
}

impl Claims {
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

/// 令牌由外部认证系统签发，本服务只负责校验；签发接口供测试与运维工具使用
pub struct JwtUtils;

impl JwtUtils {
    // 获取 JWT 密钥
    fn get_secret() -> String {
        AppConfig::get().jwt.secret.clone()
    }

    // 生成 Access Token
    pub fn issue_access_token(user_id: i64) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        Self::issue_token_with_expiry(
            &Self::get_secret(),
            user_id,
            ACCESS_TOKEN_TYPE,
            chrono::Duration::minutes(config.jwt.access_token_expiry),
        )
    }

    // 生成带自定义过期时间的 Token
    pub fn issue_token_with_expiry(
        secret: &str,
        user_id: i64,
        token_type: &str,
        expiry_duration: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + expiry_duration;

        let claims = Claims {
            sub: user_id.to_string(),
            token_type: token_type.to_string(),
            exp: expiration.timestamp().max(0) as usize,
            iat: now.timestamp() as usize,
        };

        let encoding_key = EncodingKey::from_secret(secret.as_ref());
        encode(&Header::default(), &claims, &encoding_key)
    }

    // 使用指定密钥验证 token 并检查类型
    pub fn verify_with_secret(
        secret: &str,
        token: &str,
        expected_type: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        let claims = decode::<Claims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)?;
        if claims.token_type != expected_type {
            return Err(jsonwebtoken::errors::Error::from(
                jsonwebtoken::errors::ErrorKind::InvalidToken,
            ));
        }
        Ok(claims)
    }

    // 验证 Access Token
    pub fn verify_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_with_secret(&Self::get_secret(), token, ACCESS_TOKEN_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    #[test]
    fn test_issue_and_verify() {
        let token =
            JwtUtils::issue_token_with_expiry(SECRET, 42, "access", chrono::Duration::minutes(5))
                .unwrap();
        let claims = JwtUtils::verify_with_secret(SECRET, &token, "access").unwrap();
        assert_eq!(claims.user_id(), Some(42));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token =
            JwtUtils::issue_token_with_expiry(SECRET, 42, "access", chrono::Duration::minutes(5))
                .unwrap();
        assert!(JwtUtils::verify_with_secret("other", &token, "access").is_err());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let token =
            JwtUtils::issue_token_with_expiry(SECRET, 42, "refresh", chrono::Duration::minutes(5))
                .unwrap();
        assert!(JwtUtils::verify_with_secret(SECRET, &token, "access").is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let token =
            JwtUtils::issue_token_with_expiry(SECRET, 42, "access", chrono::Duration::hours(-2))
                .unwrap();
        assert!(JwtUtils::verify_with_secret(SECRET, &token, "access").is_err());
    }
}
