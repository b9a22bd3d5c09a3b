//! Generator for the i686 interrupt service routine tables.
//!
//! Produces two artifacts consumed by the kernel build:
//! - a C source declaring the 256 assembly entry stubs and an `isr_initialize_gates` routine that
//!   installs each into its IDT gate;
//! - an assembler include with one `ISR_ERRORCODE`/`ISR_NOERRORCODE` macro invocation per vector.
//!
//! Output is fully determined by [`VECTOR_COUNT`] and [`ERROR_CODE_VECTORS`], so repeated runs
//! produce byte-identical files.

mod emit;
mod vectors;

pub use emit::*;
pub use vectors::*;


use std::{
    fs::{File, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to render ISR tables")]
    Render(#[source] std::io::Error),

    #[error("failed to open `{}` for writing", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write `{}`", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = core::result::Result<T, Error>;

/// Both generated files, rendered in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub source: Vec<u8>,
    pub include: Vec<u8>,
}

impl Artifacts {
    pub fn render() -> Result<Self> {
        let mut source = Vec::new();
        render_source(&mut source).map_err(Error::Render)?;

        let mut include = Vec::new();
        render_include(&mut include).map_err(Error::Render)?;

        Ok(Self { source, include })
    }
}

/// Writes the C source to `source_path` and the assembler include to `include_path`, replacing
/// any previous contents.
///
/// Both targets are opened before either is truncated, so an unopenable path leaves both files as
/// they were. Parent directories are not created.
pub fn generate(source_path: impl AsRef<Path>, include_path: impl AsRef<Path>) -> Result<()> {
    let source_path = source_path.as_ref();
    let include_path = include_path.as_ref();

    let artifacts = Artifacts::render()?;

    let mut source_file = open_target(source_path)?;
    let mut include_file = open_target(include_path)?;

    overwrite(&mut source_file, source_path, &artifacts.source)?;
    log::debug!("wrote {} bytes to {}", artifacts.source.len(), source_path.display());

    overwrite(&mut include_file, include_path, &artifacts.include)?;
    log::debug!("wrote {} bytes to {}", artifacts.include.len(), include_path.display());

    Ok(())
}

fn open_target(path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(|source| Error::Open { path: path.to_path_buf(), source })
}

fn overwrite(file: &mut File, path: &Path, contents: &[u8]) -> Result<()> {
    file.set_len(0)
        .and_then(|()| file.write_all(contents))
        .and_then(|()| file.flush())
        .map_err(|source| Error::Write { path: path.to_path_buf(), source })
}

/// State of a single generated file relative to freshly rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    UpToDate,
    Stale,
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Freshness {
    pub source: FileState,
    pub include: FileState,
}

impl Freshness {
    pub fn is_up_to_date(&self) -> bool {
        self.source == FileState::UpToDate && self.include == FileState::UpToDate
    }
}

/// Compares the files at the given paths against the rendered output, without writing anything.
pub fn check(source_path: impl AsRef<Path>, include_path: impl AsRef<Path>) -> Result<Freshness> {
    let artifacts = Artifacts::render()?;

    Ok(Freshness {
        source: compare(source_path.as_ref(), &artifacts.source)?,
        include: compare(include_path.as_ref(), &artifacts.include)?,
    })
}

fn compare(path: &Path, expected: &[u8]) -> Result<FileState> {
    match std::fs::read(path) {
        Ok(contents) if contents == expected => Ok(FileState::UpToDate),
        Ok(_) => Ok(FileState::Stale),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(FileState::Missing),
        Err(source) => Err(Error::Read { path: path.to_path_buf(), source }),
    }
}
