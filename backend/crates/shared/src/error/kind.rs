//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum shared by the parsing and platform crates.

use serde::Serialize;

/// エラー種別の列挙体
///
/// 各クレートのエラー型は `kind()` でこの分類にマッピングされます。
/// 呼び出し側はクレートごとの詳細を知らなくても、失敗の種類で分岐できます。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Format;
/// assert_eq!(kind.as_str(), "Format Error");
/// assert!(kind.is_input_error());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 必須の入力文字列が存在しない
    NullInput,
    /// 数値として解釈できない、またはハッシュの構造が不正
    Format,
    /// 必須の引数（置換対象など）が存在しない
    NullArgument,
    /// 内部エラー（暗号プリミティブの失敗など）
    Internal,
}

impl ErrorKind {
    /// ユーザー向けの文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::NullInput.as_str(), "Null Input");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NullInput => "Null Input",
            ErrorKind::Format => "Format Error",
            ErrorKind::NullArgument => "Null Argument",
            ErrorKind::Internal => "Internal Error",
        }
    }

    /// 呼び出し側の入力に起因するエラーかどうかを判定
    ///
    /// `Internal` 以外は `true` を返します。
    #[inline]
    pub const fn is_input_error(&self) -> bool {
        !matches!(self, ErrorKind::Internal)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
