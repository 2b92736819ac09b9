//! Command line parsing for the interactive prompt.

use std::path::PathBuf;

use crate::engine::DEFAULT_PERMUTATION_DEPTH;

/// One parsed prompt command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load { path: PathBuf, file_glob: String },
    Get(String),
    QueryShallow(String),
    QueryDeep(String),
    Insert { resource: String, content: String },
    Delete(String),
    Echo(String),
    Flush,
    Info,
    Clear,
    SetDebug(bool),
    SetOrderFixed(bool),
    SetPermutationDepth(i32),
}

impl Command {
    /// Parses a prompt line.
    ///
    /// Returns `None` for blank lines, unknown verbs, and commands with the
    /// wrong number of arguments. Verbs are case-sensitive.
    pub fn parse(line: &str) -> Option<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (&verb, args) = tokens.split_first()?;

        let command = match (verb, args) {
            ("source" | "load", [path, glob]) => Self::Load {
                path: PathBuf::from(*path),
                file_glob: glob.to_string(),
            },
            ("get" | "search" | "query", [key]) => Self::Get(key.to_string()),
            ("query", [key, "?"]) => Self::QueryShallow(key.to_string()),
            ("query", [key, "*"]) => Self::QueryDeep(key.to_string()),
            ("add" | "insert", [resource, content]) => Self::Insert {
                resource: resource.to_string(),
                content: content.to_string(),
            },
            ("delete", [key]) => Self::Delete(key.to_string()),
            ("echo", [text]) => Self::Echo(text.to_string()),
            ("flush", _) => Self::Flush,
            ("info", _) => Self::Info,
            ("clear", _) => Self::Clear,
            ("debug", [flag]) => Self::SetDebug(*flag == "true"),
            ("orderfixed", [flag]) => Self::SetOrderFixed(*flag == "true"),
            ("numberofpermutation" | "nop", [depth]) => {
                Self::SetPermutationDepth(depth.parse().unwrap_or(DEFAULT_PERMUTATION_DEPTH))
            }
            _ => return None,
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_needs_path_and_glob() {
        assert_eq!(
            Command::parse("load ./data *.txt"),
            Some(Command::Load {
                path: PathBuf::from("./data"),
                file_glob: "*.txt".to_string(),
            })
        );
        assert_eq!(
            Command::parse("source ./data *.*"),
            Some(Command::Load {
                path: PathBuf::from("./data"),
                file_glob: "*.*".to_string(),
            })
        );
        assert_eq!(Command::parse("load ./data"), None);
    }

    #[test]
    fn query_suffix_selects_depth() {
        assert_eq!(Command::parse("query car"), Some(Command::Get("car".into())));
        assert_eq!(
            Command::parse("query car ?"),
            Some(Command::QueryShallow("car".into()))
        );
        assert_eq!(
            Command::parse("query car *"),
            Some(Command::QueryDeep("car".into()))
        );
        assert_eq!(Command::parse("query car !"), None);
        assert_eq!(Command::parse("search car"), Some(Command::Get("car".into())));
    }

    #[test]
    fn insert_takes_resource_and_single_word() {
        assert_eq!(
            Command::parse("add doc1 hello"),
            Some(Command::Insert {
                resource: "doc1".into(),
                content: "hello".into(),
            })
        );
        assert_eq!(Command::parse("insert doc1 hello world"), None);
    }

    #[test]
    fn toggles_treat_anything_but_true_as_false() {
        assert_eq!(Command::parse("debug true"), Some(Command::SetDebug(true)));
        assert_eq!(Command::parse("debug yes"), Some(Command::SetDebug(false)));
        assert_eq!(
            Command::parse("orderfixed TRUE"),
            Some(Command::SetOrderFixed(false))
        );
        assert_eq!(Command::parse("debug"), None);
    }

    #[test]
    fn permutation_depth_accepts_negatives_and_falls_back_on_garbage() {
        assert_eq!(
            Command::parse("nop 0"),
            Some(Command::SetPermutationDepth(0))
        );
        assert_eq!(
            Command::parse("numberofpermutation 4"),
            Some(Command::SetPermutationDepth(4))
        );
        assert_eq!(
            Command::parse("nop many"),
            Some(Command::SetPermutationDepth(DEFAULT_PERMUTATION_DEPTH))
        );
        assert_eq!(
            Command::parse("nop -1"),
            Some(Command::SetPermutationDepth(-1))
        );
        assert_eq!(
            Command::parse("nop 99999999999"),
            Some(Command::SetPermutationDepth(DEFAULT_PERMUTATION_DEPTH))
        );
    }

    #[test]
    fn malformed_lines_are_ignored() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   "), None);
        assert_eq!(Command::parse("frobnicate x"), None);
        assert_eq!(Command::parse("GET car"), None);
        assert_eq!(Command::parse("delete"), None);
        assert_eq!(Command::parse("echo a b"), None);
    }

    #[test]
    fn bare_verbs_ignore_extra_arguments() {
        assert_eq!(Command::parse("flush now"), Some(Command::Flush));
        assert_eq!(Command::parse("info"), Some(Command::Info));
        assert_eq!(Command::parse("clear"), Some(Command::Clear));
    }
}
