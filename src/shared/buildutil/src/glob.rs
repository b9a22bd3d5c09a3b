use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read directory `{}`", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ClassItem {
    Char(char),
    Range(char, char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(char),
    AnyChar,
    AnyRun,
    Class { negated: bool, items: Vec<ClassItem> },
}

impl Token {
    fn matches(&self, c: char) -> bool {
        match self {
            Token::Literal(literal) => *literal == c,
            Token::AnyChar => true,
            // Runs are consumed by the matcher, never compared per character.
            Token::AnyRun => false,
            Token::Class { negated, items } => {
                let found = items.iter().any(|item| match *item {
                    ClassItem::Char(item) => item == c,
                    ClassItem::Range(start, end) => (start..=end).contains(&c),
                });

                found != *negated
            }
        }
    }
}

/// Shell-style wildcard pattern for a single path component.
///
/// Supports `*`, `?`, `[seq]`, `[a-z]`, and `[!seq]`. A `[` with no closing `]` matches itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    tokens: Vec<Token>,
}

impl Pattern {
    pub fn new(pattern: &str) -> Self {
        let chars = pattern.chars().collect::<Vec<_>>();
        let mut tokens = Vec::with_capacity(chars.len());

        let mut index = 0;
        while index < chars.len() {
            match chars[index] {
                '*' => {
                    // Consecutive stars are equivalent to one.
                    if tokens.last() != Some(&Token::AnyRun) {
                        tokens.push(Token::AnyRun);
                    }
                }
                '?' => tokens.push(Token::AnyChar),
                '[' => match Self::parse_class(&chars[(index + 1)..]) {
                    Some((class, consumed)) => {
                        tokens.push(class);
                        index += consumed;
                    }
                    None => tokens.push(Token::Literal('[')),
                },
                c => tokens.push(Token::Literal(c)),
            }

            index += 1;
        }

        Self { tokens }
    }

    /// Parses the body of a `[...]` class, returning the token and the number of characters
    /// consumed including the closing bracket.
    fn parse_class(chars: &[char]) -> Option<(Token, usize)> {
        let mut index = 0;
        let negated = chars.first() == Some(&'!');
        if negated {
            index += 1;
        }

        let mut items = Vec::new();
        let body_start = index;
        loop {
            let c = *chars.get(index)?;
            // A `]` directly after the opening bracket is part of the set.
            if c == ']' && index > body_start {
                return Some((Token::Class { negated, items }, index + 1));
            }

            match (chars.get(index + 1), chars.get(index + 2)) {
                (Some('-'), Some(&end)) if end != ']' => {
                    items.push(ClassItem::Range(c, end));
                    index += 3;
                }
                _ => {
                    items.push(ClassItem::Char(c));
                    index += 1;
                }
            }
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        let chars = name.chars().collect::<Vec<_>>();

        let mut token_index = 0;
        let mut char_index = 0;
        // Position after the most recent `*`, and the input position it is currently absorbing to.
        let mut backtrack: Option<(usize, usize)> = None;

        while char_index < chars.len() {
            match self.tokens.get(token_index) {
                Some(Token::AnyRun) => {
                    token_index += 1;
                    backtrack = Some((token_index, char_index));
                }
                Some(token) if token.matches(chars[char_index]) => {
                    token_index += 1;
                    char_index += 1;
                }
                _ => match backtrack {
                    Some((after_run, absorbed)) => {
                        token_index = after_run;
                        char_index = absorbed + 1;
                        backtrack = Some((after_run, absorbed + 1));
                    }
                    None => return false,
                },
            }
        }

        self.tokens[token_index..].iter().all(|token| *token == Token::AnyRun)
    }
}

/// Matches `pattern` against the entries of `root` and of every directory beneath it.
///
/// Directories are visited in pre-order, and entries within a directory are sorted by name, so
/// the result is stable across runs. Symbolic links to directories are not followed. Only an
/// unreadable `root` is an error; unreadable directories beneath it are skipped with a warning.
pub fn glob_recursive(root: impl AsRef<Path>, pattern: &str) -> Result<Vec<PathBuf>, Error> {
    let pattern = Pattern::new(pattern);
    let mut matches = Vec::new();
    walk(root.as_ref(), &pattern, &mut matches)?;

    Ok(matches)
}

fn walk(dir: &Path, pattern: &Pattern, matches: &mut Vec<PathBuf>) -> Result<(), Error> {
    let read_dir_err = |source| Error::ReadDir { path: dir.to_path_buf(), source };

    let mut entries = std::fs::read_dir(dir)
        .map_err(read_dir_err)?
        .map(|entry| -> std::io::Result<_> {
            let entry = entry?;
            Ok((entry.file_name(), entry.path(), entry.file_type()?.is_dir()))
        })
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(read_dir_err)?;
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    log::trace!("globbing {} entries in {}", entries.len(), dir.display());

    for (name, path, _) in &entries {
        if pattern.matches(&name.to_string_lossy()) {
            matches.push(path.clone());
        }
    }

    for (_, path, is_dir) in entries {
        if is_dir {
            walk_subdirectory(&path, pattern, matches);
        }
    }

    Ok(())
}

/// Unreadable directories below the root are skipped, so one inaccessible directory does not fail
/// the whole build.
fn walk_subdirectory(dir: &Path, pattern: &Pattern, matches: &mut Vec<PathBuf>) {
    if let Err(err) = walk(dir, pattern, matches) {
        log::warn!("skipping {}: {err}", dir.display());
    }
}
