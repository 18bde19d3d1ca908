use crate::domain::frontend::{Package, Program};
use anyhow::{Context, Result, bail};
use regex::Regex;
use tracing::debug;

/// A Go-style namespace selector.
///
/// `...` matches any string, and a trailing `/...` also matches the bare prefix, so
/// `./store/...` selects `store` and everything below it. Patterns starting with `./` (or
/// `.` alone) are matched against the package directory relative to the program root;
/// everything else is matched against the namespace path.
#[derive(Debug, Clone)]
pub struct NamespacePattern {
    source: String,
    relative: bool,
    regex: Regex,
}

impl NamespacePattern {
    pub fn parse(pattern: &str) -> Result<Self> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            bail!("Empty package pattern");
        }
        let (relative, body) = if pattern == "." {
            (true, "")
        } else if let Some(rest) = pattern.strip_prefix("./") {
            (true, rest)
        } else {
            (false, pattern)
        };
        let regex = Regex::new(&to_regex(body))
            .with_context(|| format!("Invalid package pattern: {pattern}"))?;
        Ok(Self {
            source: pattern.to_string(),
            relative,
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, package: &Package) -> bool {
        let target = if self.relative {
            package.dir.trim_start_matches("./").trim_end_matches('/')
        } else {
            package.path.as_str()
        };
        self.regex.is_match(target)
    }
}

fn to_regex(body: &str) -> String {
    let (body, tail) = match body.strip_suffix("/...") {
        Some(prefix) => (prefix, "(/.*)?"),
        None => (body, ""),
    };
    let escaped = regex::escape(body).replace(r"\.\.\.", ".*");
    format!("^{escaped}{tail}$")
}

/// Keep only the packages selected by at least one pattern. An empty pattern list keeps
/// everything.
pub fn filter_packages(mut program: Program, patterns: &[NamespacePattern]) -> Program {
    if patterns.is_empty() {
        return program;
    }
    program.packages.retain(|package| {
        let keep = patterns.iter().any(|p| p.matches(package));
        if !keep {
            debug!(namespace = %package.path, "package not selected by patterns");
        }
        keep
    });
    program
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(path: &str, dir: &str) -> Package {
        Package {
            path: path.to_string(),
            name: path.rsplit('/').next().unwrap_or(path).to_string(),
            dir: dir.to_string(),
            files: vec![],
        }
    }

    fn matches(pattern: &str, path: &str, dir: &str) -> bool {
        NamespacePattern::parse(pattern)
            .unwrap()
            .matches(&package(path, dir))
    }

    #[test]
    fn recursive_relative_pattern_matches_everything() {
        assert!(matches("./...", "example.com/app", ""));
        assert!(matches("./...", "example.com/app/store/sql", "store/sql"));
    }

    #[test]
    fn trailing_wildcard_includes_prefix() {
        assert!(matches("./store/...", "example.com/app/store", "store"));
        assert!(matches("./store/...", "example.com/app/store/sql", "store/sql"));
        assert!(!matches("./store/...", "example.com/app/storage", "storage"));
    }

    #[test]
    fn exact_relative_pattern() {
        assert!(matches("./api", "example.com/app/api", "api"));
        assert!(!matches("./api", "example.com/app/api/v1", "api/v1"));
        assert!(matches(".", "example.com/app", ""));
        assert!(!matches(".", "example.com/app/api", "api"));
    }

    #[test]
    fn import_path_patterns() {
        assert!(matches("example.com/app/...", "example.com/app", ""));
        assert!(matches("example.com/app/...", "example.com/app/api", "api"));
        assert!(matches("example.com/.../sql", "example.com/app/store/sql", "store/sql"));
        assert!(!matches("example.com/app", "example.com/app/api", "api"));
    }

    #[test]
    fn dots_are_literal() {
        assert!(!matches("example.com/app", "exampleXcom/app", ""));
    }

    #[test]
    fn empty_pattern_is_rejected() {
        assert!(NamespacePattern::parse("  ").is_err());
    }

    #[test]
    fn filter_keeps_selected_packages() {
        let program = Program {
            root: ".".into(),
            packages: vec![
                package("example.com/app", ""),
                package("example.com/app/store", "store"),
                package("example.com/app/api", "api"),
            ],
            errors: vec![],
        };
        let patterns = vec![
            NamespacePattern::parse("./store/...").unwrap(),
            NamespacePattern::parse(".").unwrap(),
        ];
        let filtered = filter_packages(program, &patterns);
        let kept: Vec<&str> = filtered.packages.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(kept, vec!["example.com/app", "example.com/app/store"]);
    }
}
