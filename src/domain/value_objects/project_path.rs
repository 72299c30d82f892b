use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// ProjectPath関連のエラー
#[derive(Debug, Error, PartialEq)]
pub enum ProjectPathError {
    #[error("Project path must not be empty")]
    Empty,

    #[error("Project path must be relative: {0}")]
    Absolute(String),

    #[error("Path traversal detected in project path: {0}")]
    Traversal(String),

    #[error("Empty segment in project path: {0}")]
    EmptySegment(String),

    #[error("Invalid characters in project path: {0}")]
    InvalidCharacters(String),
}

impl ProjectPathError {
    /// エラーの原因となった値（存在する場合）
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Absolute(value)
            | Self::Traversal(value)
            | Self::EmptySegment(value)
            | Self::InvalidCharacters(value) => Some(value),
        }
    }
}

/// プロジェクトのフルパス（例: `group/subgroup/project`）
///
/// ワークディレクトリ配下の相対パスとして安全に使える値のみを保持する。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectPath(String);

impl ProjectPath {
    /// 新しいProjectPathを作成
    pub fn new(full_path: &str) -> Result<Self, ProjectPathError> {
        if full_path.trim().is_empty() {
            return Err(ProjectPathError::Empty);
        }

        if full_path.starts_with('/') || full_path.starts_with('~') || has_drive_prefix(full_path)
        {
            return Err(ProjectPathError::Absolute(full_path.to_string()));
        }

        if full_path
            .chars()
            .any(|c| c == '\\' || c == '\0' || c.is_control())
        {
            return Err(ProjectPathError::InvalidCharacters(full_path.to_string()));
        }

        for segment in full_path.split('/') {
            match segment {
                "" => return Err(ProjectPathError::EmptySegment(full_path.to_string())),
                "." | ".." => return Err(ProjectPathError::Traversal(full_path.to_string())),
                _ => {}
            }
        }

        Ok(Self(full_path.to_string()))
    }

    /// フルパスを文字列として取得
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 表示用のプロジェクト名（最後のセグメント）
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// パスのセグメント
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// OSのパス区切りに合わせた相対パス
    pub fn to_relative_path(&self) -> PathBuf {
        self.segments().collect()
    }
}

impl fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_project_path() {
        let path = ProjectPath::new("acme/platform/api-gateway").unwrap();
        assert_eq!(path.as_str(), "acme/platform/api-gateway");
        assert_eq!(path.name(), "api-gateway");
        assert_eq!(
            path.segments().collect::<Vec<_>>(),
            vec!["acme", "platform", "api-gateway"]
        );
    }

    #[test]
    fn test_single_segment_name() {
        let path = ProjectPath::new("dotfiles").unwrap();
        assert_eq!(path.name(), "dotfiles");
    }

    #[test]
    fn test_relative_path_conversion() {
        let path = ProjectPath::new("acme/tools/cli").unwrap();
        let expected: PathBuf = ["acme", "tools", "cli"].iter().collect();
        assert_eq!(path.to_relative_path(), expected);
    }

    #[test]
    fn test_dotted_names_allowed() {
        assert!(ProjectPath::new("acme/.github").is_ok());
        assert!(ProjectPath::new("acme/site.io").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(ProjectPath::new(""), Err(ProjectPathError::Empty));
        assert_eq!(ProjectPath::new("  "), Err(ProjectPathError::Empty));
    }

    #[test]
    fn test_rejects_absolute_paths() {
        assert!(matches!(
            ProjectPath::new("/etc/passwd"),
            Err(ProjectPathError::Absolute(_))
        ));
        assert!(matches!(
            ProjectPath::new("~/repo"),
            Err(ProjectPathError::Absolute(_))
        ));
        assert!(matches!(
            ProjectPath::new("C:/repo"),
            Err(ProjectPathError::Absolute(_))
        ));
    }

    #[test]
    fn test_rejects_traversal() {
        assert!(matches!(
            ProjectPath::new("acme/../../etc"),
            Err(ProjectPathError::Traversal(_))
        ));
        assert!(matches!(
            ProjectPath::new("./acme"),
            Err(ProjectPathError::Traversal(_))
        ));
    }

    #[test]
    fn test_rejects_empty_segments_and_bad_characters() {
        assert!(matches!(
            ProjectPath::new("acme//repo"),
            Err(ProjectPathError::EmptySegment(_))
        ));
        assert!(matches!(
            ProjectPath::new("acme/repo/"),
            Err(ProjectPathError::EmptySegment(_))
        ));
        assert!(matches!(
            ProjectPath::new("acme\\repo"),
            Err(ProjectPathError::InvalidCharacters(_))
        ));
        assert!(matches!(
            ProjectPath::new("acme/re\npo"),
            Err(ProjectPathError::InvalidCharacters(_))
        ));
    }

    #[test]
    fn test_error_value() {
        let err = ProjectPath::new("acme/../x").unwrap_err();
        assert_eq!(err.value(), Some("acme/../x"));
        assert_eq!(ProjectPathError::Empty.value(), None);
    }
}
