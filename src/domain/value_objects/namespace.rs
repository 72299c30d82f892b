use std::fmt;
use thiserror::Error;

/// Namespace関連のエラー
#[derive(Debug, Error, PartialEq)]
pub enum NamespaceError {
    #[error("Namespace must not be empty")]
    Empty,

    #[error("Invalid character '{character}' in namespace: {value}")]
    InvalidCharacter { character: char, value: String },

    #[error("Empty path segment in namespace: {0}")]
    EmptySegment(String),
}

/// GitLabのネームスペース（グループまたはユーザー）のフルパス
///
/// 例: `my-group` や `my-group/sub-group`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
    /// 新しいNamespaceを作成
    ///
    /// 前後の空白とスラッシュは取り除かれる。
    pub fn new(full_path: &str) -> Result<Self, NamespaceError> {
        let trimmed = full_path.trim().trim_matches('/');

        if trimmed.is_empty() {
            return Err(NamespaceError::Empty);
        }

        // GitLabのパスに使える文字のみ許可
        if let Some(character) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/')))
        {
            return Err(NamespaceError::InvalidCharacter {
                character,
                value: trimmed.to_string(),
            });
        }

        if trimmed.split('/').any(str::is_empty) {
            return Err(NamespaceError::EmptySegment(trimmed.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// フルパスを文字列として取得
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Namespace {
    type Err = NamespaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
