//! User Name Value Object
//!
//! ユーザー名はログインと画面表示に使う公開識別子。
//!
//! ## 不変条件
//! - NFKC 正規化・前後空白除去済み
//! - 長さ: 1〜50 文字
//! - 制御文字を含まない
//! - 一意性は小文字化した canonical 形で判定する

use derive_more::Display;
use unicode_normalization::UnicodeNormalization;

use crate::error::{AuthError, AuthResult};

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{original}")]
pub struct UserName {
    original: String,
    canonical: String,
}

impl UserName {
    pub fn new(raw: impl AsRef<str>) -> AuthResult<Self> {
        let normalized: String = raw.as_ref().nfkc().collect();
        let original = normalized.trim().to_owned();

        if original.is_empty() {
            return Err(AuthError::Validation("username cannot be empty".into()));
        }

        if original.chars().count() > USER_NAME_MAX_LENGTH {
            return Err(AuthError::Validation(format!(
                "username must be at most {} characters",
                USER_NAME_MAX_LENGTH
            )));
        }

        if original.chars().any(char::is_control) {
            return Err(AuthError::Validation(
                "username contains invalid characters".into(),
            ));
        }

        let canonical = original.to_lowercase();
        Ok(Self {
            original,
            canonical,
        })
    }

    /// Restore from a stored value
    pub fn from_db(original: impl Into<String>) -> Self {
        let original = original.into();
        let canonical = original.to_lowercase();
        Self {
            original,
            canonical,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// 重複判定用の小文字形
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_trims_and_keeps_case() {
        let name = UserName::new("  Alice ").unwrap();
        assert_eq!(name.as_str(), "Alice");
        assert_eq!(name.canonical(), "alice");
        assert_eq!(name.to_string(), "Alice");
    }

    #[test]
    fn test_user_name_invalid() {
        assert!(matches!(UserName::new("   "), Err(AuthError::Validation(_))));
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH + 1)).is_err());
        assert!(UserName::new("bad\u{0}name").is_err());
    }

    #[test]
    fn test_user_name_cyrillic() {
        let name = UserName::new("Прораб").unwrap();
        assert_eq!(name.canonical(), "прораб");
    }
}
