use crate::errors::{HelperError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static SCHEME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // Any `scheme://` run, wherever it sits in the host string
    Regex::new(r"[A-Za-z0-9_]+://").unwrap()
});

/// How files are written: straight to disk, or through a remote transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FsMethod {
    #[default]
    Direct,
    FtpExt,
    Other(String),
}

impl From<String> for FsMethod {
    fn from(s: String) -> Self {
        match s.as_str() {
            "" | "direct" => FsMethod::Direct,
            "ftpext" => FsMethod::FtpExt,
            _ => FsMethod::Other(s),
        }
    }
}

impl From<FsMethod> for String {
    fn from(m: FsMethod) -> Self {
        m.to_string()
    }
}

impl fmt::Display for FsMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsMethod::Direct => f.write_str("direct"),
            FsMethod::FtpExt => f.write_str("ftpext"),
            FsMethod::Other(s) => f.write_str(s),
        }
    }
}

/// Transport configuration. Missing fields mean "not configured".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportSettings {
    pub method: FsMethod,
    pub ftp_host: Option<String>,
    pub ftp_user: Option<String>,
    pub ftp_pass: Option<String>,
    pub ftp_ssl: bool,
}

impl TransportSettings {
    /// Read `FS_METHOD`, `FTP_HOST`, `FTP_USER`, `FTP_PASS` and `FTP_SSL` from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup (environment, a map, ...).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            method: lookup("FS_METHOD").map(FsMethod::from).unwrap_or_default(),
            ftp_host: lookup("FTP_HOST"),
            ftp_user: lookup("FTP_USER"),
            ftp_pass: lookup("FTP_PASS"),
            ftp_ssl: lookup("FTP_SSL")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
                .unwrap_or(false),
        }
    }

    /// Load settings from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    Ftp,
    Ftps,
}

/// Credentials handed to a remote transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_type: Option<ConnectionType>,
}

impl Credentials {
    /// No field carries a value. `""` and `"0"` count as unset.
    fn is_blank(&self) -> bool {
        let blank = |s: &Option<String>| s.as_deref().map_or(true, |v| v.is_empty() || v == "0");
        blank(&self.hostname) && blank(&self.username) && blank(&self.password) && self.port.is_none()
    }
}

/// Work out transport credentials. Only `ftpext` produces any.
pub fn resolve_credentials(settings: &TransportSettings) -> Credentials {
    if settings.method != FsMethod::FtpExt {
        return Credentials::default();
    }

    let mut creds = Credentials {
        username: settings.ftp_user.clone(),
        password: settings.ftp_pass.clone(),
        ..Credentials::default()
    };

    if let Some(host) = settings.ftp_host.as_deref() {
        let host = strip_scheme(host);
        // A colon at position 0 is not a port separator.
        match host.split_once(':') {
            Some((name, port)) if !name.is_empty() => {
                creds.hostname = Some(name.to_string());
                creds.port = port.trim().parse::<u16>().ok();
            }
            _ => creds.hostname = Some(host.to_string()),
        }
    }

    creds.connection_type = if settings.ftp_ssl {
        Some(ConnectionType::Ftps)
    } else if creds.is_blank() {
        None
    } else {
        Some(ConnectionType::Ftp)
    };
    creds
}

/// Remove every `scheme://` occurrence.
fn strip_scheme(host: &str) -> Cow<'_, str> {
    SCHEME_PATTERN.replace_all(host, "")
}

/// File operations against the theme's storage.
pub trait FileSystem {
    fn get_contents(&self, path: &Path) -> Result<String>;
    fn put_contents(&self, path: &Path, content: &str) -> Result<()>;
    fn exists(&self, path: &Path) -> bool;
    fn mkdir(&self, path: &Path) -> Result<()>;
    fn delete(&self, path: &Path) -> Result<()>;
}

/// Local disk access, relative paths resolved under `root`.
#[derive(Debug, Clone)]
pub struct DirectFilesystem {
    root: PathBuf,
}

impl DirectFilesystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl FileSystem for DirectFilesystem {
    fn get_contents(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(self.resolve(path))?)
    }

    fn put_contents(&self, path: &Path, content: &str) -> Result<()> {
        let target = self.resolve(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, content)?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn mkdir(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(self.resolve(path))?;
        Ok(())
    }

    fn delete(&self, path: &Path) -> Result<()> {
        let target = self.resolve(path);
        if target.is_dir() {
            fs::remove_dir_all(target)?;
        } else {
            fs::remove_file(target)?;
        }
        Ok(())
    }
}

/// Host-supplied connector for remote methods (FTP, SSH, ...).
pub trait RemoteTransport: Send + Sync {
    fn connect(&self, method: &FsMethod, creds: &Credentials) -> Result<Box<dyn FileSystem>>;
}

/// Open a filesystem handle for `settings`.
///
/// Direct access is served locally under `root`. Remote methods resolve their
/// credentials and hand them to `transport`; without one they fail with
/// [`HelperError::UnsupportedTransport`].
pub fn init_filesystem(
    settings: &TransportSettings,
    root: impl Into<PathBuf>,
    transport: Option<&dyn RemoteTransport>,
) -> Result<Box<dyn FileSystem>> {
    match &settings.method {
        FsMethod::Direct => {
            let fs = DirectFilesystem::new(root);
            tracing::debug!(root = %fs.root().display(), "direct filesystem ready");
            Ok(Box::new(fs))
        }
        other => {
            let creds = resolve_credentials(settings);
            let Some(transport) = transport else {
                tracing::debug!(method = %other, "no transport for remote filesystem");
                return Err(HelperError::UnsupportedTransport(other.to_string()));
            };
            tracing::debug!(
                method = %other,
                host = creds.hostname.as_deref().unwrap_or(""),
                "connecting remote filesystem"
            );
            transport.connect(other, &creds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> TransportSettings {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TransportSettings::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn direct_method_needs_no_credentials() {
        let s = settings(&[("FTP_HOST", "example.com")]);
        assert_eq!(s.method, FsMethod::Direct);
        assert_eq!(resolve_credentials(&s), Credentials::default());
    }

    #[test]
    fn ftp_host_with_scheme_and_port() {
        let s = settings(&[
            ("FS_METHOD", "ftpext"),
            ("FTP_HOST", "ftp://example.com:2121"),
            ("FTP_USER", "bob"),
            ("FTP_PASS", "secret"),
        ]);
        let c = resolve_credentials(&s);
        assert_eq!(c.hostname.as_deref(), Some("example.com"));
        assert_eq!(c.port, Some(2121));
        assert_eq!(c.username.as_deref(), Some("bob"));
        assert_eq!(c.connection_type, Some(ConnectionType::Ftp));
    }

    #[test]
    fn non_numeric_port_is_dropped() {
        let s = settings(&[("FS_METHOD", "ftpext"), ("FTP_HOST", "example.com:abc")]);
        let c = resolve_credentials(&s);
        assert_eq!(c.hostname.as_deref(), Some("example.com"));
        assert_eq!(c.port, None);
    }

    #[test]
    fn every_scheme_occurrence_is_removed() {
        assert_eq!(strip_scheme("my-ftp://host"), "my-host");
        assert_eq!(strip_scheme("ftp://a.com/x://y"), "a.com/y");
        assert_eq!(strip_scheme("plain.host"), "plain.host");
        assert_eq!(strip_scheme("é://host"), "é://host");
    }

    #[test]
    fn zero_counts_as_unset() {
        let s = settings(&[("FS_METHOD", "ftpext"), ("FTP_USER", "0"), ("FTP_PASS", "")]);
        assert_eq!(resolve_credentials(&s).connection_type, None);
        let s = settings(&[("FS_METHOD", "ftpext"), ("FTP_USER", "00")]);
        assert_eq!(resolve_credentials(&s).connection_type, Some(ConnectionType::Ftp));
    }

    #[test]
    fn connection_type_rules() {
        let empty = settings(&[("FS_METHOD", "ftpext")]);
        assert_eq!(resolve_credentials(&empty).connection_type, None);

        let ssl = settings(&[("FS_METHOD", "ftpext"), ("FTP_SSL", "true")]);
        assert_eq!(resolve_credentials(&ssl).connection_type, Some(ConnectionType::Ftps));
    }

    #[test]
    fn settings_deserialize_with_defaults() {
        let s: TransportSettings =
            serde_json::from_str(r#"{"method":"ftpext","ftp_host":"h"}"#).unwrap();
        assert_eq!(s.method, FsMethod::FtpExt);
        assert!(!s.ftp_ssl);
        let d: TransportSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(d, TransportSettings::default());
    }
}
