use crate::config::IsrsConfig;
use anyhow::{Context, Result};
use isrgen::FileState;
use std::path::{Path, PathBuf};

static DEFAULT_SOURCE_PATH: &str = "src/kernel/arch/i686/isrs_gen.c";
static DEFAULT_INCLUDE_PATH: &str = "src/kernel/arch/i686/isrs_gen.inc";

#[derive(clap::Parser)]
#[group(skip)]
pub struct Options {
    /// Where to write the generated C source.
    #[arg(long)]
    source: Option<PathBuf>,

    /// Where to write the generated assembler include.
    #[arg(long)]
    include: Option<PathBuf>,

    /// Only verify that the generated files are up to date; exits with an error if they are not.
    #[arg(long)]
    check: bool,
}

/// Output paths, taken from the command line, then `xtask.toml`, then the defaults.
fn resolve_paths(config: &IsrsConfig, options: &Options) -> (PathBuf, PathBuf) {
    let source = options
        .source
        .clone()
        .or_else(|| config.source.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_PATH));
    let include = options
        .include
        .clone()
        .or_else(|| config.include.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INCLUDE_PATH));

    (source, include)
}

pub fn isrs(config: &IsrsConfig, options: Options) -> Result<()> {
    let (source_path, include_path) = resolve_paths(config, &options);

    if options.check {
        let freshness = isrgen::check(&source_path, &include_path).with_context(|| "failed to check ISR tables")?;
        report(&source_path, freshness.source);
        report(&include_path, freshness.include);

        anyhow::ensure!(freshness.is_up_to_date(), "generated ISR tables are out of date; run `cargo xtask isrs`");
    } else {
        isrgen::generate(&source_path, &include_path).with_context(|| "failed to generate ISR tables")?;
        log::info!("Generated {} and {}.", source_path.display(), include_path.display());
    }

    Ok(())
}

fn report(path: &Path, state: FileState) {
    match state {
        FileState::UpToDate => log::debug!("{} is up to date", path.display()),
        FileState::Stale => log::error!("{} is out of date", path.display()),
        FileState::Missing => log::error!("{} is missing", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use xshell::Shell;

    fn options(args: &[&str]) -> Options {
        Options::parse_from(std::iter::once("isrs").chain(args.iter().copied()))
    }

    #[test]
    fn default_paths() {
        let (source, include) = resolve_paths(&IsrsConfig::default(), &options(&[]));

        assert_eq!(source, PathBuf::from("src/kernel/arch/i686/isrs_gen.c"));
        assert_eq!(include, PathBuf::from("src/kernel/arch/i686/isrs_gen.inc"));
    }

    #[test]
    fn flags_override_config() {
        let config = IsrsConfig { source: Some("cfg.c".into()), include: Some("cfg.inc".into()) };
        let (source, include) = resolve_paths(&config, &options(&["--source", "cli.c"]));

        assert_eq!(source, PathBuf::from("cli.c"));
        assert_eq!(include, PathBuf::from("cfg.inc"));
    }

    #[test]
    fn check_fails_until_generated() {
        let sh = Shell::new().unwrap();
        let tmp_dir = sh.create_temp_dir().unwrap();
        let source = tmp_dir.path().join("isrs_gen.c");
        let include = tmp_dir.path().join("isrs_gen.inc");
        let config = IsrsConfig { source: Some(source.clone()), include: Some(include.clone()) };

        assert!(isrs(&config, options(&["--check"])).is_err());

        isrs(&config, options(&[])).unwrap();
        assert!(sh.path_exists(&source));
        assert!(sh.path_exists(&include));

        isrs(&config, options(&["--check"])).unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let sh = Shell::new().unwrap();
        let tmp_dir = sh.create_temp_dir().unwrap();
        let config = IsrsConfig {
            source: Some(tmp_dir.path().join("no/such/dir/isrs_gen.c")),
            include: Some(tmp_dir.path().join("isrs_gen.inc")),
        };

        assert!(isrs(&config, options(&[])).is_err());
    }
}
