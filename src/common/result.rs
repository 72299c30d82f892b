use crate::common::error::GlsyncError;

/// glsync全体で使用するResult型のエイリアス
///
/// # Examples
///
/// ```
/// use glsync::common::result::GlsyncResult;
/// use glsync::common::error::GlsyncError;
///
/// fn example_function() -> GlsyncResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> GlsyncResult<()> {
///     Err(GlsyncError::config_error("Something went wrong"))
/// }
/// ```
pub type GlsyncResult<T> = Result<T, GlsyncError>;

/// Optionのエラー変換ヘルパー
pub trait OptionExt<T> {
    /// Noneの場合にConfigErrorを返す
    fn ok_or_config_error(self, message: impl Into<String>) -> GlsyncResult<T>;

    /// Noneの場合にValidationErrorを返す
    ///
    /// ```
    /// use glsync::common::result::{GlsyncResult, OptionExt};
    ///
    /// let none_value: Option<String> = None;
    /// let result: GlsyncResult<String> = none_value.ok_or_validation_error("field", "required");
    /// assert!(result.is_err());
    /// ```
    fn ok_or_validation_error(
        self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> GlsyncResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_config_error(self, message: impl Into<String>) -> GlsyncResult<T> {
        self.ok_or_else(|| GlsyncError::config_error(message))
    }

    fn ok_or_validation_error(
        self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> GlsyncResult<T> {
        self.ok_or_else(|| GlsyncError::validation_error(field, message, None))
    }
}

/// Resultのエラー変換ヘルパー
pub trait ResultExt<T> {
    /// ファイルシステムエラーとしてGlsyncResultに変換
    ///
    /// ```
    /// use glsync::common::result::{GlsyncResult, ResultExt};
    /// use std::path::PathBuf;
    ///
    /// let result: Result<(), std::io::Error> = Err(std::io::Error::new(
    ///     std::io::ErrorKind::PermissionDenied, "denied"
    /// ));
    /// let converted: GlsyncResult<()> =
    ///     result.with_filesystem_error("create dir", Some(PathBuf::from("/x")));
    /// assert!(converted.is_err());
    /// ```
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> GlsyncResult<T>;
}

impl<T> ResultExt<T> for Result<T, std::io::Error> {
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> GlsyncResult<T> {
        self.map_err(|e| GlsyncError::filesystem_error_with_source(message, path, e))
    }
}
