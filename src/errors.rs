use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuicktabError {
    Validation(String),
    NotFound(String),
    Storage(String),
    FileOperation(String),
    Serialization(String),
    IconFetch(String),
    Config(String),
}

impl QuicktabError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            QuicktabError::Validation(_) => "E001",
            QuicktabError::NotFound(_) => "E002",
            QuicktabError::Storage(_) => "E003",
            QuicktabError::FileOperation(_) => "E004",
            QuicktabError::Serialization(_) => "E005",
            QuicktabError::IconFetch(_) => "E006",
            QuicktabError::Config(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            QuicktabError::Validation(_) => "Validation Error",
            QuicktabError::NotFound(_) => "Resource Not Found",
            QuicktabError::Storage(_) => "Storage Error",
            QuicktabError::FileOperation(_) => "File Operation Error",
            QuicktabError::Serialization(_) => "Serialization Error",
            QuicktabError::IconFetch(_) => "Icon Fetch Error",
            QuicktabError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            QuicktabError::Validation(msg)
            | QuicktabError::NotFound(msg)
            | QuicktabError::Storage(msg)
            | QuicktabError::FileOperation(msg)
            | QuicktabError::Serialization(msg)
            | QuicktabError::IconFetch(msg)
            | QuicktabError::Config(msg) => msg,
        }
    }

    /// Whether the caller rejected the request (as opposed to an I/O failure)
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            QuicktabError::Validation(_) | QuicktabError::NotFound(_)
        )
    }

    /// 格式化为彩色输出
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for QuicktabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for QuicktabError {}

// 便捷的构造函数
impl QuicktabError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        QuicktabError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        QuicktabError::NotFound(msg.into())
    }

    pub fn storage<T: Into<String>>(msg: T) -> Self {
        QuicktabError::Storage(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        QuicktabError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        QuicktabError::Serialization(msg.into())
    }

    pub fn icon_fetch<T: Into<String>>(msg: T) -> Self {
        QuicktabError::IconFetch(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        QuicktabError::Config(msg.into())
    }
}

impl From<std::io::Error> for QuicktabError {
    fn from(err: std::io::Error) -> Self {
        QuicktabError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for QuicktabError {
    fn from(err: serde_json::Error) -> Self {
        QuicktabError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, QuicktabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let all = [
            QuicktabError::validation("a"),
            QuicktabError::not_found("a"),
            QuicktabError::storage("a"),
            QuicktabError::file_operation("a"),
            QuicktabError::serialization("a"),
            QuicktabError::icon_fetch("a"),
            QuicktabError::config("a"),
        ];
        let codes: std::collections::HashSet<_> = all.iter().map(|e| e.code()).collect();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn test_format_simple() {
        let err = QuicktabError::validation("name cannot be empty");
        assert_eq!(err.to_string(), "Validation Error: name cannot be empty");
        assert!(err.is_rejection());
        assert!(!QuicktabError::storage("disk full").is_rejection());
    }

    #[test]
    fn test_format_colored_carries_code() {
        let out = QuicktabError::not_found("No link at position 3.1").format_colored();
        assert!(out.contains("E002"));
        assert!(out.contains("No link at position 3.1"));
    }

    #[test]
    fn test_from_serde_error() {
        let err: QuicktabError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(err.code(), "E005");
    }
}
