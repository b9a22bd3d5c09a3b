use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use xshell::Shell;

pub static DEFAULT_CONFIG_PATH: &str = "xtask.toml";

/// Contents of `xtask.toml`. Every key is optional; absent keys fall back to built-in defaults.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub isrs: IsrsConfig,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct IsrsConfig {
    pub source: Option<PathBuf>,
    pub include: Option<PathBuf>,
}

/// Loads the configuration at `path`, or `xtask.toml` if it exists when no path is given.
pub fn load(sh: &Shell, path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => path,
        None if sh.path_exists(DEFAULT_CONFIG_PATH) => Path::new(DEFAULT_CONFIG_PATH),
        None => {
            log::debug!("no {DEFAULT_CONFIG_PATH} found, using defaults");
            return Ok(Config::default());
        }
    };

    let contents = sh.read_file(path).with_context(|| format!("failed reading config `{}`", path.display()))?;
    let config = parse(&contents).with_context(|| format!("failed parsing config `{}`", path.display()))?;
    log::debug!("loaded config from {}: {config:?}", path.display());

    Ok(config)
}

fn parse(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(parse("").unwrap(), Config::default());
    }

    #[test]
    fn isrs_paths() {
        let config = parse(
            r#"
            [isrs]
            source = "build/isrs_gen.c"
            "#,
        )
        .unwrap();

        assert_eq!(config.isrs.source, Some(PathBuf::from("build/isrs_gen.c")));
        assert_eq!(config.isrs.include, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse("[isrs]\noutput = \"isrs.c\"\n").is_err());
        assert!(parse("[irq]\n").is_err());
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let sh = Shell::new().unwrap();
        let tmp_dir = sh.create_temp_dir().unwrap();

        assert!(load(&sh, Some(tmp_dir.path().join("xtask.toml").as_path())).is_err());
    }

    #[test]
    fn explicit_config_is_loaded() {
        let sh = Shell::new().unwrap();
        let tmp_dir = sh.create_temp_dir().unwrap();
        let path = tmp_dir.path().join("xtask.toml");
        sh.write_file(&path, "[isrs]\ninclude = \"isrs.inc\"\n").unwrap();

        let config = load(&sh, Some(path.as_path())).unwrap();
        assert_eq!(config.isrs.include, Some(PathBuf::from("isrs.inc")));
    }
}
