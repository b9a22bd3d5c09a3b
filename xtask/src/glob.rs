use anyhow::{Context, Result};
use buildutil::{find_index, glob_recursive, NodeName};
use std::path::PathBuf;

#[derive(clap::Parser)]
#[group(skip)]
pub struct Options {
    /// Wildcard pattern matched against entry names, e.g. `*.c`.
    pattern: String,

    /// Directory to search beneath.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Lists the first match with this file name before all others.
    #[arg(long)]
    first: Option<String>,
}

pub fn glob(options: Options) -> Result<()> {
    let mut matches = glob_recursive(&options.root, &options.pattern)
        .with_context(|| format!("failed globbing `{}` under {}", options.pattern, options.root.display()))?;

    if let Some(name) = &options.first {
        if !move_to_front(&mut matches, name) {
            log::warn!("no match named `{name}`");
        }
    }

    log::debug!("{} matches for `{}`", matches.len(), options.pattern);
    for path in matches {
        println!("{}", path.display());
    }

    Ok(())
}

/// Moves the first path named `name` to the front, keeping the relative order of the rest.
fn move_to_front(paths: &mut [PathBuf], name: &str) -> bool {
    match find_index(paths, |path| path.is_file_name(name)) {
        Some(index) => {
            paths[..=index].rotate_right(1);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::move_to_front;
    use std::path::PathBuf;

    #[test]
    fn moves_named_path_first() {
        let mut paths = ["obj/main.o", "obj/isr.o", "obj/crti.o", "obj/gdt.o"].map(PathBuf::from);

        assert!(move_to_front(&mut paths, "crti.o"));
        assert_eq!(paths, ["obj/crti.o", "obj/main.o", "obj/isr.o", "obj/gdt.o"].map(PathBuf::from));
    }

    #[test]
    fn leaves_order_without_match() {
        let mut paths = ["obj/main.o", "obj/isr.o"].map(PathBuf::from);

        assert!(!move_to_front(&mut paths, "crtn.o"));
        assert_eq!(paths, ["obj/main.o", "obj/isr.o"].map(PathBuf::from));
    }
}
