use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;
use url::Url;

/// URLの最大長
const MAX_URL_LENGTH: usize = 2048;

/// GitURL関連のエラー
#[derive(Debug, Error, PartialEq)]
pub enum GitUrlError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Missing host in URL")]
    MissingHost,

    #[error("Missing repository path")]
    MissingRepoPath,

    #[error("Malicious URL detected: {0}")]
    MaliciousUrl(String),

    #[error("Invalid characters in URL: {0}")]
    InvalidCharacters(String),
}

impl GitUrlError {
    /// 形式エラーの原因となったURL（存在する場合）
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::InvalidFormat(value) => Some(value),
            _ => None,
        }
    }
}

/// クローン用のGit URLの値オブジェクト
///
/// `git clone` にそのまま渡すため、元の文字列を変更せずに保持する。
/// 受け付ける形式:
/// - scp形式: `git@gitlab.com:group/project.git`
/// - `ssh://`, `https://`, `http://`, `git://`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GitUrl(String);

fn scp_like_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?:[A-Za-z0-9._~-]+@)?([A-Za-z0-9.-]+):([^\s:]\S*)$")
            .expect("scp-like pattern is a valid regex")
    })
}

impl GitUrl {
    /// 新しいGitUrlインスタンスを作成
    pub fn new(url: &str) -> Result<Self, GitUrlError> {
        Self::validate_security(url)?;

        if url.contains("://") {
            Self::validate_url(url)?;
        } else {
            Self::validate_scp_like(url)?;
        }

        Ok(Self(url.to_string()))
    }

    /// URLのセキュリティ検証
    fn validate_security(url: &str) -> Result<(), GitUrlError> {
        if url.trim().is_empty() {
            return Err(GitUrlError::Empty);
        }

        if url.len() > MAX_URL_LENGTH {
            return Err(GitUrlError::MaliciousUrl("URL too long".to_string()));
        }

        // `git clone -u...` のようにオプションとして解釈されるのを防ぐ
        if url.starts_with('-') {
            return Err(GitUrlError::MaliciousUrl(format!(
                "URL must not start with '-': {}",
                url
            )));
        }

        if let Some(ch) = url.chars().find(|c| c.is_control() || c.is_whitespace()) {
            return Err(GitUrlError::InvalidCharacters(format!(
                "Unexpected character: {:?}",
                ch
            )));
        }

        Ok(())
    }

    /// scp形式（`user@host:path`）を検証
    fn validate_scp_like(url: &str) -> Result<(), GitUrlError> {
        let captures = scp_like_pattern()
            .captures(url)
            .ok_or_else(|| GitUrlError::InvalidFormat(url.to_string()))?;

        captures.get(1).ok_or(GitUrlError::MissingHost)?;
        let path = captures.get(2).map(|m| m.as_str()).unwrap_or_default();

        Self::validate_repo_path(path)
    }

    /// スキーム付きURLを検証
    fn validate_url(url: &str) -> Result<(), GitUrlError> {
        let parsed = Url::parse(url).map_err(|_| GitUrlError::InvalidFormat(url.to_string()))?;

        if !matches!(parsed.scheme(), "https" | "http" | "git" | "ssh") {
            return Err(GitUrlError::UnsupportedScheme(parsed.scheme().to_string()));
        }

        parsed
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or(GitUrlError::MissingHost)?;

        Self::validate_repo_path(parsed.path())
    }

    fn validate_repo_path(path: &str) -> Result<(), GitUrlError> {
        let trimmed = path.trim_start_matches('/').trim_end_matches('/');
        let repo_path = trimmed.strip_suffix(".git").unwrap_or(trimmed);

        if repo_path.is_empty() {
            return Err(GitUrlError::MissingRepoPath);
        }

        Ok(())
    }

    /// 元のURL文字列を取得
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GitUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
