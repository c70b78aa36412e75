use std::{fs, path::Path};

use rand::Rng;

use crate::error::RegisterSetError;

/// The register names operands are drawn from. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterSet {
    names: Vec<String>,
}

impl RegisterSet {
    /// Builds a set from newline-delimited text. Each line is trimmed; lines
    /// that are blank after trimming are skipped. Returns `None` when no names
    /// remain.
    pub fn parse(text: &str) -> Option<Self> {
        let names: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
        (!names.is_empty()).then_some(Self { names })
    }

    /// Reads the register list file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegisterSetError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| RegisterSetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::parse(&text).ok_or_else(|| RegisterSetError::Empty {
            path: path.to_path_buf(),
        })?;
        tracing::info!("Loaded {} registers from {}", set.len(), path.display());
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Picks one register uniformly. Repeated calls draw with replacement.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.names[rng.gen_range(0..self.names.len())]
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::test_utils::create_seeded_rng;

    #[test]
    fn parse_trims_and_skips_blank_lines() {
        let set = RegisterSet::parse("  x1 \n\nx2\r\n\t\nx3\n").unwrap();
        assert_eq!(set.names(), ["x1", "x2", "x3"]);
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
    }

    #[test]
    fn parse_rejects_blank_input() {
        assert_eq!(RegisterSet::parse(""), None);
        assert_eq!(RegisterSet::parse(" \n\t\n"), None);
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "zero\nra\nsp").unwrap();
        let set = RegisterSet::load(file.path()).unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains("ra"));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RegisterSet::load(dir.path().join("registers.txt")).unwrap_err();
        assert!(matches!(err, RegisterSetError::Read { .. }), "{err}");
    }

    #[test]
    fn load_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = RegisterSet::load(file.path()).unwrap_err();
        assert!(matches!(err, RegisterSetError::Empty { .. }), "{err}");
    }

    #[test]
    fn choose_covers_every_register() {
        let set = RegisterSet::parse("a0\na1\na2\na3").unwrap();
        let mut rng = create_seeded_rng();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let name = set.choose(&mut rng);
            assert!(set.contains(name));
            seen.insert(name.to_string());
        }
        assert_eq!(seen.len(), set.len());
    }
}
