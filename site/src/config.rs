use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORTAL_PORT must be a port number, got `{0}`")]
    BadPort(String),
}

/// Apply `path`, or the nearest `.env` when `None`, to the process
/// environment. Existing variables win. Must run before the logger reads
/// `RUST_LOG`. Returns the file that was applied.
pub fn load_dotenv(path: Option<&Path>) -> Option<PathBuf> {
    match path {
        Some(p) => dotenvy::from_path(p).ok().map(|()| p.to_path_buf()),
        None => dotenvy::dotenv().ok(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    /// Trunk output: index.html plus the wasm bundle.
    pub dist_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    /// Reads `PORTAL_*` variables from the process environment. Call
    /// [`load_dotenv`] beforehand so `.env` entries are visible.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")); // = site/

        let port = match get("PORTAL_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::BadPort(raw))?,
            None => 3000,
        };

        Ok(Self {
            host: get("PORTAL_HOST").unwrap_or_else(|| "127.0.0.1".to_owned()),
            port,
            dist_dir: get("PORTAL_DIST_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| root.join("../dist")),
            assets_dir: get("PORTAL_ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| root.join("../assets")),
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 3000);
        assert!(cfg.dist_dir.ends_with("dist"));
        assert!(cfg.assets_dir.ends_with("assets"));
        assert!(cfg.index_file().ends_with("dist/index.html"));
    }

    #[test]
    fn overrides_apply() {
        let cfg = SiteConfig::from_lookup(lookup(&[
            ("PORTAL_HOST", "0.0.0.0"),
            ("PORTAL_PORT", " 8080 "),
            ("PORTAL_DIST_DIR", "/srv/portal"),
        ]))
        .unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.dist_dir, PathBuf::from("/srv/portal"));
        assert_eq!(cfg.index_file(), PathBuf::from("/srv/portal/index.html"));
    }

    #[test]
    fn dotenv_entries_reach_the_environment() {
        let path = env::temp_dir().join(format!("portal-site-{}.env", std::process::id()));
        std::fs::write(&path, "PORTAL_DOTENV_CHECK=warn,actix_web=debug\n").unwrap();

        assert_eq!(load_dotenv(Some(path.as_path())), Some(path.clone()));
        assert_eq!(
            env::var("PORTAL_DOTENV_CHECK").as_deref(),
            Ok("warn,actix_web=debug")
        );

        std::fs::remove_file(&path).unwrap();
        assert_eq!(load_dotenv(Some(path.as_path())), None);
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = SiteConfig::from_lookup(lookup(&[("PORTAL_PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::BadPort(ref raw) if raw == "http"));

        assert!(SiteConfig::from_lookup(lookup(&[("PORTAL_PORT", "70000")])).is_err());
    }
}
