use crate::common::error::GlsyncError;
use crate::common::result::{GlsyncResult, ResultExt};
use crate::domain::entities::{project::ProjectRecord, workdir::Workdir};
use crate::domain::value_objects::namespace::Namespace;
use crate::infrastructure::gitlab::{ProjectNode, ProjectSource};
use crate::infrastructure::scm::ScmOperations;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// ネームスペース同期の設定
#[derive(Debug, Clone)]
pub struct SyncNamespaceConfig {
    /// 同期対象のネームスペース
    pub namespace: Namespace,

    /// ミラー先のワークディレクトリ
    pub workdir: Workdir,

    /// 実際にはクローン・プルせず、計画のみ出力するか
    pub dry_run: bool,

    /// 詳細ログを出力するか
    pub verbose: bool,
}

impl SyncNamespaceConfig {
    pub fn new(namespace: Namespace, workdir: Workdir) -> Self {
        Self {
            namespace,
            workdir,
            dry_run: false,
            verbose: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// 同期操作の結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncResult {
    /// 新規クローンされたリポジトリの数（dry-runでは予定数）
    pub cloned_count: usize,

    /// プルされたリポジトリの数（dry-runでは予定数）
    pub pulled_count: usize,

    /// 失敗またはスキップされたリポジトリの数
    pub failed_count: usize,

    /// 発生したエラーのリスト
    pub errors: Vec<String>,
}

impl SyncResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, error: String) {
        self.failed_count += 1;
        self.errors.push(error);
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn total_count(&self) -> usize {
        self.cloned_count + self.pulled_count + self.failed_count
    }

    fn record(&mut self, operation: SyncOperation) {
        match operation {
            SyncOperation::Clone => self.cloned_count += 1,
            SyncOperation::Pull => self.pulled_count += 1,
        }
    }
}

/// リポジトリごとの操作の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOperation {
    /// ローカルに存在しないので新規クローン
    Clone,
    /// 既に存在するのでプル
    Pull,
}

impl SyncOperation {
    /// ローカルパスの有無から操作を決定
    pub fn decide(local_path: &Path) -> Self {
        if local_path.exists() {
            Self::Pull
        } else {
            Self::Clone
        }
    }
}

/// ネームスペース同期のユースケース
///
/// 一覧取得の失敗は致命的エラーとして返す。個々のリポジトリの失敗は
/// ログに出力して次のリポジトリへ進む。
pub struct SyncNamespaceUseCase {
    config: SyncNamespaceConfig,
    source: Arc<dyn ProjectSource>,
    scm: Arc<dyn ScmOperations>,
}

impl SyncNamespaceUseCase {
    /// 新しいSyncNamespaceUseCaseインスタンスを作成
    pub fn new(
        config: SyncNamespaceConfig,
        source: Arc<dyn ProjectSource>,
        scm: Arc<dyn ScmOperations>,
    ) -> Self {
        Self {
            config,
            source,
            scm,
        }
    }

    /// 同期を実行
    pub async fn execute(&self) -> GlsyncResult<SyncResult> {
        // 1. プロジェクト一覧の取得（失敗は致命的）
        let projects = self.fetch_projects().await?;

        // 2. 各リポジトリを順番にクローンまたはプル
        let mut result = SyncResult::new();
        for node in &projects {
            self.sync_project(node, &mut result).await;
        }

        debug!(
            cloned = result.cloned_count,
            pulled = result.pulled_count,
            failed = result.failed_count,
            "Namespace sync finished"
        );

        Ok(result)
    }

    /// プロジェクト一覧の取得
    async fn fetch_projects(&self) -> GlsyncResult<Vec<ProjectNode>> {
        let namespace = &self.config.namespace;

        let projects = self
            .source
            .list_projects(namespace)
            .await
            .map_err(GlsyncError::from)?;

        if self.config.verbose {
            info!("Found {} projects in {}", projects.len(), namespace);
        }

        Ok(projects)
    }

    /// 単一プロジェクトの同期（エラーはresultに記録して握りつぶす）
    async fn sync_project(&self, node: &ProjectNode, result: &mut SyncResult) {
        let record =
            match ProjectRecord::from_listing(node.ssh_url_to_repo.as_deref(), &node.full_path) {
                Ok(record) => record,
                Err(e) => {
                    error!("Skipping {}: {}", node.full_path, e);
                    result.add_error(format!("Skipped {}: {}", node.full_path, e));
                    return;
                }
            };

        let local_path = self.config.workdir.project_path(&record);
        let operation = SyncOperation::decide(&local_path);

        match operation {
            SyncOperation::Clone => {
                info!("Cloning {} to {}", record.name(), local_path.display());
            }
            SyncOperation::Pull => {
                info!(
                    "Pulling {} localised in {}",
                    record.name(),
                    local_path.display()
                );
            }
        }

        if self.config.dry_run {
            result.record(operation);
            return;
        }

        let outcome = match operation {
            SyncOperation::Clone => self.clone_project(&record, &local_path).await,
            SyncOperation::Pull => self.pull_project(&record, &local_path).await,
        };

        match outcome {
            Ok(()) => result.record(operation),
            Err(e) => {
                error!("{}", e);
                result.add_error(format!("{}: {}", record.full_path, e));
            }
        }
    }

    /// リポジトリのクローン
    async fn clone_project(&self, record: &ProjectRecord, local_path: &Path) -> GlsyncResult<()> {
        // 親ディレクトリを作成
        if let Some(parent) = local_path.parent() {
            std::fs::create_dir_all(parent).with_filesystem_error(
                format!("Failed to create {}", parent.display()),
                Some(parent.to_path_buf()),
            )?;
        }

        self.scm
            .clone_repository(&record.ssh_url, local_path)
            .await
            .map_err(|e| {
                GlsyncError::scm_error_with_source(
                    format!("Failed to clone {}", record.ssh_url),
                    Some(record.full_path.to_string()),
                    e,
                )
            })
    }

    /// 既存リポジトリのプル
    async fn pull_project(&self, record: &ProjectRecord, local_path: &Path) -> GlsyncResult<()> {
        if !self.scm.is_repository(local_path) {
            warn!(
                "{} exists but does not look like a git repository",
                local_path.display()
            );
        }

        self.scm.pull_repository(local_path).await.map_err(|e| {
            GlsyncError::scm_error_with_source(
                format!("Failed to pull {}", local_path.display()),
                Some(record.full_path.to_string()),
                e,
            )
        })
    }
}
