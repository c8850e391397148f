//! HuggingFace Hub authentication report.
//!
//! Tokenizer files are read from local disk; a token stored at
//! `~/.tokenlens/.hf_token` only determines whether Hub downloads made by the
//! operator's tooling run authenticated. Startup reports which mode applies.
//! Reading the token is an explicit, fallible step invoked from `main`, never
//! a module-load-time side effect.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

fn default_token_file() -> Result<PathBuf> {
    Ok(dirs::home_dir()
        .context("Failed to get home directory")?
        .join(".tokenlens")
        .join(".hf_token"))
}

/// Read a stored Hub token from `path`. Absent file means anonymous access;
/// a present token must start with `hf_`.
pub fn read_token(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let token = fs::read_to_string(path).context("Failed to read token file")?;
    let token = token.trim().to_string();
    if !token.starts_with("hf_") {
        anyhow::bail!("Invalid token format (must start with 'hf_')");
    }
    Ok(Some(token))
}

/// Startup step: log whether Hub downloads are authenticated or anonymous.
///
/// Errors surface as a warning; the server always continues.
pub fn report_hub_auth() {
    match default_token_file().and_then(|path| read_token(&path)) {
        Ok(Some(_)) => {
            tracing::info!("HuggingFace token found, Hub downloads authenticated");
        }
        Ok(None) => {
            tracing::info!("no HuggingFace token stored, Hub downloads are anonymous");
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to read HuggingFace token, continuing anonymously");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_means_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let token = read_token(&dir.path().join(".hf_token")).unwrap();
        assert_eq!(token, None);
    }

    #[test]
    fn stored_token_is_read_and_trimmed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hf_test_token_123").unwrap();
        let token = read_token(file.path()).unwrap();
        assert_eq!(token.as_deref(), Some("hf_test_token_123"));
    }

    #[test]
    fn malformed_token_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not-a-token").unwrap();
        assert!(read_token(file.path()).is_err());
    }
}
