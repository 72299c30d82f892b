use crate::common::result::{GlsyncResult, OptionExt};
use crate::domain::value_objects::{git_url::GitUrl, project_path::ProjectPath};

/// ネームスペース配下のプロジェクト一覧の1レコード
///
/// APIレスポンスから生成され、1回の実行で一度だけ消費される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    /// SSHクローンURL（`sshUrlToRepo`）
    pub ssh_url: GitUrl,

    /// ネームスペースを含むフルパス（`fullPath`）
    pub full_path: ProjectPath,
}

impl ProjectRecord {
    /// 新しいProjectRecordインスタンスを作成
    pub fn new(ssh_url: GitUrl, full_path: ProjectPath) -> Self {
        Self { ssh_url, full_path }
    }

    /// APIが返した生の値から検証済みのレコードを作成
    ///
    /// `sshUrlToRepo` はリポジトリが無効化されたプロジェクトでは `null` になる。
    pub fn from_listing(ssh_url: Option<&str>, full_path: &str) -> GlsyncResult<Self> {
        let full_path = ProjectPath::new(full_path)?;

        let ssh_url = ssh_url
            .ok_or_validation_error("sshUrlToRepo", format!("missing for {}", full_path))?;
        let ssh_url = GitUrl::new(ssh_url)?;

        Ok(Self::new(ssh_url, full_path))
    }

    /// 表示用のプロジェクト名
    pub fn name(&self) -> &str {
        self.full_path.name()
    }
}
