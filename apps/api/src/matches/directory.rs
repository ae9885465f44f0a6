//! Read-only peer directory used to compute real skill overlaps.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerRecord {
    pub name: String,
    #[serde(default)]
    pub skills_to_teach: Vec<String>,
    #[serde(default)]
    pub skills_to_learn: Vec<String>,
}

/// Peers keyed by trimmed, lowercased name. Immutable after startup.
#[derive(Debug, Clone, Default)]
pub struct PeerDirectory {
    peers: HashMap<String, PeerRecord>,
}

impl PeerDirectory {
    pub fn from_records(records: Vec<PeerRecord>) -> Self {
        let peers = records
            .into_iter()
            .filter(|r| !r.name.trim().is_empty())
            .map(|r| (normalize_name(&r.name), r))
            .collect();
        Self { peers }
    }

    /// Loads a JSON array of peer records. A missing path yields an empty directory.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            info!("No peer directory configured; match overlaps will be empty");
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read peer directory {}", path.display()))?;
        let records: Vec<PeerRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("Peer directory {} is not valid JSON", path.display()))?;

        let directory = Self::from_records(records);
        if directory.is_empty() {
            warn!("Peer directory {} has no named peers", path.display());
        }
        info!(
            "Loaded {} peers from {}",
            directory.len(),
            path.display()
        );
        Ok(directory)
    }

    pub fn lookup(&self, name: &str) -> Option<&PeerRecord> {
        self.peers.get(&normalize_name(name))
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn record(name: &str, teach: &[&str], learn: &[&str]) -> PeerRecord {
        PeerRecord {
            name: name.to_string(),
            skills_to_teach: teach.iter().map(|s| s.to_string()).collect(),
            skills_to_learn: learn.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_lookup_is_case_and_whitespace_insensitive() {
        let dir = PeerDirectory::from_records(vec![record("Jane Doe", &["SQL"], &[])]);
        assert_eq!(dir.lookup("  jane doe ").unwrap().skills_to_teach, vec!["SQL"]);
        assert!(dir.lookup("John").is_none());
    }

    #[test]
    fn test_blank_names_are_skipped() {
        let dir = PeerDirectory::from_records(vec![record("  ", &["SQL"], &[])]);
        assert!(dir.is_empty());
    }

    #[test]
    fn test_load_without_path_is_empty() {
        let dir = PeerDirectory::load(None).unwrap();
        assert!(dir.is_empty());
        assert_eq!(dir.len(), 0);
    }

    #[test]
    fn test_load_reads_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Jane Doe", "skillsToTeach": ["Data Structures"], "skillsToLearn": ["Python"]}},
                {{"name": "John Smith", "skillsToTeach": ["Advanced SQL"]}}]"#
        )
        .unwrap();

        let dir = PeerDirectory::load(Some(file.path())).unwrap();
        assert_eq!(dir.len(), 2);
        assert!(dir.lookup("John Smith").unwrap().skills_to_learn.is_empty());
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = PeerDirectory::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }
}
