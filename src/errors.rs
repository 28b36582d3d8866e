use std::fmt;

#[derive(Debug, Clone)]
pub enum FormsampleError {
    Config(String),
    Render(String),
    Serialization(String),
}

impl FormsampleError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            FormsampleError::Config(_) => "E001",
            FormsampleError::Render(_) => "E002",
            FormsampleError::Serialization(_) => "E003",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            FormsampleError::Config(_) => "Configuration Error",
            FormsampleError::Render(_) => "Render Error",
            FormsampleError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            FormsampleError::Config(msg) => msg,
            FormsampleError::Render(msg) => msg,
            FormsampleError::Serialization(msg) => msg,
        }
    }
}

impl fmt::Display for FormsampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type(), self.message())
    }
}

impl std::error::Error for FormsampleError {}

// 便捷的构造函数
impl FormsampleError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        FormsampleError::Config(msg.into())
    }

    pub fn render<T: Into<String>>(msg: T) -> Self {
        FormsampleError::Render(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        FormsampleError::Serialization(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<serde_json::Error> for FormsampleError {
    fn from(err: serde_json::Error) -> Self {
        FormsampleError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for FormsampleError {
    fn from(err: toml::de::Error) -> Self {
        FormsampleError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FormsampleError>;
