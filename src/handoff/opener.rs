use async_trait::async_trait;
use uuid::Uuid;

/// Live handle to a newly opened browsing context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextHandle {
    id: Uuid,
}

impl ContextHandle {
    pub fn new() -> Self {
        Self { id: Uuid::now_v7() }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug)]
pub struct OpenError {
    pub message: String,
}

impl std::fmt::Display for OpenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<String> for OpenError {
    fn from(s: String) -> Self {
        OpenError { message: s }
    }
}

impl From<&str> for OpenError {
    fn from(s: &str) -> Self {
        OpenError {
            message: s.to_string(),
        }
    }
}

/// Open-context primitive. `Ok(Some(_))` is a live handle, `Ok(None)` means
/// the popup was blocked, `Err` means the attempt itself failed.
#[async_trait]
pub trait Opener: Send + Sync {
    async fn open_new_context(&self, url: &str) -> Result<Option<ContextHandle>, OpenError>;

    /// Full-page navigation fallback used when the popup is blocked.
    async fn navigate_current(&self, url: &str);
}
