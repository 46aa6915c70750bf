use crate::error::ConfigError;
use crate::settings::Settings;
use std::path::PathBuf;

/// Command-line overrides shared by every binary. Flatten into a clap parser.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct Overrides {
    /// Configuration file to read instead of `config.toml`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Data bundle to load instead of `data.bundle_path`.
    #[arg(long, global = true)]
    pub bundle: Option<PathBuf>,
}

impl Overrides {
    /// Loads settings from the selected file and applies the overrides on top.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        dotenvy::dotenv().ok();
        let path = self
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(crate::DEFAULT_CONFIG_FILE));
        let mut settings = crate::load_config_from(&path)?;
        self.apply(&mut settings);
        settings.validate()?;
        Ok(settings)
    }

    pub fn apply(&self, settings: &mut Settings) {
        if let Some(bundle) = &self.bundle {
            settings.data.bundle_path = bundle.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::Path;

    #[test]
    fn apply_replaces_only_the_bundle_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = crate::load_config_from(&dir.path().join("absent.toml")).unwrap();
        let original = settings.data.bundle_path.clone();
        let port = settings.server.port;

        Overrides::default().apply(&mut settings);
        assert_eq!(settings.data.bundle_path, original);

        let overrides = Overrides { bundle: Some("other/bundle.bin".into()), ..Default::default() };
        overrides.apply(&mut settings);
        assert_eq!(settings.data.bundle_path, Path::new("other/bundle.bin"));
        assert_eq!(settings.server.port, port);
    }

    #[test]
    fn bundle_flag_wins_over_the_config_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(b"[data]\nbundle_path = \"from/file.json\"\n[server]\nport = 8181\n")
            .unwrap();

        let from_file = Overrides { config: Some(file.path().to_path_buf()), bundle: None };
        let settings = from_file.load().unwrap();
        assert_eq!(settings.data.bundle_path, Path::new("from/file.json"));
        assert_eq!(settings.server.port, 8181);

        let both = Overrides { bundle: Some("from/flag.bin".into()), ..from_file };
        let settings = both.load().unwrap();
        assert_eq!(settings.data.bundle_path, Path::new("from/flag.bin"));
        assert_eq!(settings.server.port, 8181);
    }
}
