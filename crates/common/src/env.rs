//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the router is built.

use tracing::warn;

/// Report whether the static UI directory exists; a missing one only means
/// the browser UI is not served, the JSON API keeps working.
pub async fn frontend_available(frontend_dir: &str) -> bool {
    match tokio::fs::metadata(frontend_dir).await {
        Ok(meta) if meta.is_dir() => true,
        _ => {
            warn!(%frontend_dir, "frontend assets directory not found; static assets may 404");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::frontend_available;

    #[tokio::test]
    async fn missing_dir_is_reported() {
        assert!(!frontend_available("/nonexistent-frontend-dir-for-tests").await);
    }

    #[tokio::test]
    async fn existing_dir_is_reported() {
        let dir = std::env::temp_dir();
        assert!(frontend_available(dir.to_str().unwrap_or(".")).await);
    }
}
