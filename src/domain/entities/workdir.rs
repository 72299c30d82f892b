use super::project::ProjectRecord;
use crate::common::result::{GlsyncResult, OptionExt};
use std::path::{Path, PathBuf};

/// ネームスペースの階層をミラーするローカルのルートディレクトリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workdir {
    root: PathBuf,
}

impl Workdir {
    /// 指定されたパスをそのままワークディレクトリとして使う
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 実効ワークディレクトリを決定
    ///
    /// 明示的な指定がなければホームディレクトリを使う。
    pub fn resolve(explicit: Option<PathBuf>) -> GlsyncResult<Self> {
        Self::resolve_with_home(explicit, dirs::home_dir())
    }

    /// ホームディレクトリを外から与えて実効ワークディレクトリを決定
    pub fn resolve_with_home(explicit: Option<PathBuf>, home: Option<PathBuf>) -> GlsyncResult<Self> {
        let root = match explicit {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => home.ok_or_config_error(
                "No --workdir given and the home directory could not be determined",
            )?,
        };

        Ok(Self::new(root))
    }

    /// ルートパス
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// プロジェクトのローカルパス（`<workdir>/<fullPath>`）
    pub fn project_path(&self, project: &ProjectRecord) -> PathBuf {
        self.root.join(project.full_path.to_relative_path())
    }
}
