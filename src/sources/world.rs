//! `server.properties` reader. The parser is line oriented: blank lines and
//! `#` comments are skipped, everything else splits on the first `=` (values
//! may themselves contain `=`), both halves trimmed, last duplicate wins.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::models::{WorldConfig, WorldInfo};

const UNKNOWN: &str = "Unknown";

pub struct WorldSource {
    path: PathBuf,
}

impl WorldSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub async fn sample(&self) -> WorldInfo {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let properties = parse_properties(&contents);
                WorldInfo::Config(WorldConfig {
                    gamemode: lookup(&properties, "gamemode"),
                    difficulty: lookup(&properties, "difficulty"),
                    online_mode: lookup(&properties, "online-mode"),
                    max_world_size: lookup(&properties, "max-world-size"),
                    view_distance: lookup(&properties, "view-distance"),
                })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => WorldInfo::Error {
                error: "server.properties file not found.".to_string(),
            },
            Err(e) => WorldInfo::Error {
                error: format!("An error occurred: {e}"),
            },
        }
    }
}

fn lookup(properties: &HashMap<String, String>, key: &str) -> String {
    properties
        .get(key)
        .cloned()
        .unwrap_or_else(|| UNKNOWN.to_string())
}

pub fn parse_properties(contents: &str) -> HashMap<String, String> {
    let mut properties = HashMap::new();
    for line in contents.lines() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            properties.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    properties
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write as _;
    use std::io::Write as _;

    #[test]
    fn skips_comments_and_blank_lines() {
        let properties = parse_properties("#comment\n\n  # indented comment\ngamemode=survival\n");
        assert_eq!(properties.len(), 1);
        assert_eq!(properties["gamemode"], "survival");
    }

    #[test]
    fn splits_on_first_equals_only() {
        let properties = parse_properties("motd=A Minecraft Server x=1\n");
        assert_eq!(properties["motd"], "A Minecraft Server x=1");
    }

    #[test]
    fn trims_keys_and_values_and_last_duplicate_wins() {
        let properties = parse_properties("  difficulty =  easy  \ndifficulty=hard\n");
        assert_eq!(properties["difficulty"], "hard");
    }

    #[test]
    fn line_without_separator_is_skipped() {
        let properties = parse_properties("not a property line\nview-distance=10\n");
        assert_eq!(properties.len(), 1);
        assert_eq!(properties["view-distance"], "10");
    }

    #[test]
    fn roundtrips_through_the_file_format() {
        let pairs = [
            ("gamemode", "creative"),
            ("difficulty", "hard"),
            ("online-mode", "true"),
            ("max-world-size", "29999984"),
            ("view-distance", "12"),
            ("motd", "hello=world"),
        ];
        let mut contents = String::from("# generated\n\n");
        for (key, value) in pairs {
            writeln!(contents, "{key}={value}").unwrap();
        }
        let properties = parse_properties(&contents);
        for (key, value) in pairs {
            assert_eq!(properties[key], value);
        }
    }

    #[tokio::test]
    async fn missing_file_yields_the_exact_error_entry() {
        let source = WorldSource::new(PathBuf::from("/no/such/server.properties"));
        match source.sample().await {
            WorldInfo::Error { error } => {
                assert_eq!(error, "server.properties file not found.")
            }
            other => panic!("expected error entry, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn recognized_keys_default_to_unknown() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "gamemode=survival").unwrap();
        writeln!(file, "view-distance=10").unwrap();

        let source = WorldSource::new(file.path().to_path_buf());
        match source.sample().await {
            WorldInfo::Config(config) => {
                assert_eq!(config.gamemode, "survival");
                assert_eq!(config.view_distance, "10");
                assert_eq!(config.difficulty, "Unknown");
                assert_eq!(config.online_mode, "Unknown");
                assert_eq!(config.max_world_size, "Unknown");
            }
            other => panic!("expected config, got {other:?}"),
        }
    }
}
