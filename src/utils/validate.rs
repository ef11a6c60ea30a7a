use once_cell::sync::Lazy;
use regex::Regex;

/// 资料名称最大长度
pub const MATERIAL_NAME_MAX_LEN: usize = 100;

// 资料名称出现在下载路径中，只允许 URL 安全字符，且不能以点开头
static MATERIAL_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("Invalid material name regex")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("Invalid url regex"));

pub fn validate_material_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() || name.len() > MATERIAL_NAME_MAX_LEN {
        return Err("Material name length must be between 1 and 100 characters");
    }
    if !MATERIAL_NAME_RE.is_match(name) {
        return Err(
            "Material name must start with a letter or digit and contain only letters, digits, dots, underscores or hyphens",
        );
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_url(url: &str) -> Result<(), &'static str> {
    if !URL_RE.is_match(url) {
        return Err("URL must be an absolute http(s) address");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_name() {
        assert!(validate_material_name("hw1").is_ok());
        assert!(validate_material_name("lecture-01_notes.v2").is_ok());
        assert!(validate_material_name("").is_err());
        assert!(validate_material_name(".hidden").is_err());
        assert!(validate_material_name("a/b").is_err());
        assert!(validate_material_name("with space").is_err());
        assert!(validate_material_name(&"a".repeat(101)).is_err());
        assert!(validate_material_name(&"a".repeat(100)).is_ok());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("jane@uni.edu").is_ok());
        assert!(validate_email("jane@uni").is_err());
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn test_url() {
        assert!(validate_url("https://github.com/jdoe").is_ok());
        assert!(validate_url("http://example.org/a?b=c").is_ok());
        assert!(validate_url("ftp://example.org").is_err());
        assert!(validate_url("github.com/jdoe").is_err());
    }
}
