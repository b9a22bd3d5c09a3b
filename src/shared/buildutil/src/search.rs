use std::path::{Path, PathBuf};

/// Index of the first item satisfying `predicate`.
pub fn find_index<T>(items: &[T], predicate: impl FnMut(&T) -> bool) -> Option<usize> {
    items.iter().position(predicate)
}

/// Something in the build graph that can be identified by file name.
pub trait NodeName {
    fn is_file_name(&self, name: &str) -> bool;
}

/// Free-form strings are matched loosely, since they may be whole command-line fragments.
impl NodeName for str {
    fn is_file_name(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl NodeName for String {
    fn is_file_name(&self, name: &str) -> bool {
        self.as_str().is_file_name(name)
    }
}

/// Filesystem nodes match only on their final component.
impl NodeName for Path {
    fn is_file_name(&self, name: &str) -> bool {
        self.file_name().is_some_and(|file_name| file_name == name)
    }
}

impl NodeName for PathBuf {
    fn is_file_name(&self, name: &str) -> bool {
        self.as_path().is_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_match() {
        let items = [3, 8, 10, 8];

        assert_eq!(find_index(&items, |&item| item == 8), Some(1));
        assert_eq!(find_index(&items, |&item| item > 100), None);
        assert_eq!(find_index::<u8>(&[], |_| true), None);
    }

    #[test]
    fn strings_match_substrings() {
        assert!("build/i686/crti.o".is_file_name("crti.o"));
        assert!(String::from("crti.o").is_file_name("crti"));
        assert!(!"crtn.o".is_file_name("crti.o"));
    }

    #[test]
    fn paths_match_final_component() {
        assert!(Path::new("build/i686/crti.o").is_file_name("crti.o"));
        assert!(!Path::new("build/i686/crti.o").is_file_name("crti"));
        assert!(!Path::new("build/crti.o/kernel.o").is_file_name("crti.o"));
        assert!(!Path::new("/").is_file_name(""));
    }

    #[test]
    fn locates_node_by_name() {
        let objects = [PathBuf::from("obj/main.o"), PathBuf::from("obj/crti.o"), PathBuf::from("obj/isr.o")];

        assert_eq!(find_index(&objects, |object| object.is_file_name("crti.o")), Some(1));
        assert_eq!(find_index(&objects, |object| object.is_file_name("crtn.o")), None);
    }
}
