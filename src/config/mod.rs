use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_dotfiles")]
    pub dotfiles: String,
    #[serde(default = "default_layout")]
    pub default_layout: String,
    #[serde(default)]
    pub recursive: bool,
}

fn default_dotfiles() -> String {
    "hide".to_string()
}

fn default_layout() -> String {
    "columns".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dotfiles: default_dotfiles(),
            default_layout: default_layout(),
            recursive: false,
        }
    }
}

impl Config {
    /// Reads the config file if it exists; a missing file means defaults.
    /// Loading never writes, only `lst init` creates the file.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.generate_config_content())?;
        Ok(())
    }

    fn generate_config_content(&self) -> String {
        format!(
            r#"# lst Configuration File

# How dotted entries are treated when listing a directory's children
# Values:
#   - "hide"        hide entries starting with a dot
#   - "almost-all"  show dotted entries, but not . and ..
#   - "all"         show dotted entries plus . and ..
# Default: "hide"
dotfiles = "{}"

# Default output layout
# Values:
#   - "columns"  names joined with two spaces on a single line
#   - "lines"    one name per line
# Default: "columns"
default_layout = "{}"

# List subdirectories recursively by default
# Default: false
recursive = {}
"#,
            self.dotfiles, self.default_layout, self.recursive
        )
    }

    pub fn get_config_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("lst").join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_content_round_trips() {
        let config = Config {
            dotfiles: "almost-all".to_string(),
            default_layout: "lines".to_string(),
            recursive: true,
        };
        let parsed: Config = toml::from_str(&config.generate_config_content()).unwrap();
        assert_eq!(parsed.dotfiles, "almost-all");
        assert_eq!(parsed.default_layout, "lines");
        assert!(parsed.recursive);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.dotfiles, "hide");
        assert_eq!(parsed.default_layout, "columns");
        assert!(!parsed.recursive);
    }
}
