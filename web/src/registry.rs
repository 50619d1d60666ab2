use std::{fs, path::Path, sync::Arc};

use shared_types::Responder;

use crate::error::RegistryError;

/// The fixed set of responders served to every client.
///
/// Built once at start-up and shared read-only; cloning only bumps a refcount.
#[derive(Debug, Clone)]
pub struct ResponderRegistry {
    responders: Arc<[Responder]>,
}

impl ResponderRegistry {
    pub fn new(responders: Vec<Responder>) -> Self {
        Self {
            responders: responders.into(),
        }
    }

    /// Demo units around Chennai, Bangalore and Coimbatore.
    pub fn builtin() -> Self {
        Self::new(vec![
            Responder::new("Responder 1", 13.0674, 80.2377, true),
            Responder::new("Responder 2", 12.9716, 77.5946, true),
            Responder::new("Responder 3", 13.0827, 80.2707, true),
            Responder::new("Responder 4", 11.0168, 76.9558, false),
        ])
    }

    /// Reads a JSON array of responders.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        let data = fs::read_to_string(path)?;
        let responders: Vec<Responder> = serde_json::from_str(&data)?;
        Ok(Self::new(responders))
    }

    pub fn from_optional_file<P: AsRef<Path>>(path: Option<P>) -> Result<Self, RegistryError> {
        match path {
            Some(path) => {
                tracing::info!("Loading responders from {}", path.as_ref().display());
                Self::load_from_file(path)
            }
            None => Ok(Self::builtin()),
        }
    }

    pub fn responders(&self) -> &[Responder] {
        &self.responders
    }

    pub fn snapshot(&self) -> Vec<Responder> {
        self.responders.to_vec()
    }

    pub fn len(&self) -> usize {
        self.responders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ResponderCategory;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.json", name, std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn builtin_registry_keeps_order() {
        let registry = ResponderRegistry::builtin();
        let names: Vec<_> = registry.responders().iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, ["Responder 1", "Responder 2", "Responder 3", "Responder 4"]);
        assert!(!registry.responders()[3].available);
    }

    #[test]
    fn loads_responders_from_json() {
        let path = temp_file(
            "registry-load",
            r#"[
                {"name": "Unit A", "lat": 13.05, "lon": 80.25, "type": "ambulance", "available": true},
                {"name": "Unit B", "lat": 13.10, "lon": 80.28, "available": false}
            ]"#,
        );

        let registry = ResponderRegistry::load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.responders()[0].category, ResponderCategory::Ambulance);
        assert_eq!(registry.responders()[1].category, ResponderCategory::Generic);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let path = temp_file("registry-bad", r#"{"name": "not a list"}"#);

        let result = ResponderRegistry::load_from_file(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(RegistryError::Parse(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = ResponderRegistry::load_from_file("/definitely/not/here/responders.json");
        assert!(matches!(result, Err(RegistryError::Io(_))));
    }

    #[test]
    fn no_path_means_builtin() {
        let registry = ResponderRegistry::from_optional_file(None::<&str>).unwrap();
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn clones_share_the_same_snapshot() {
        let registry = ResponderRegistry::builtin();
        let clone = registry.clone();

        assert!(std::ptr::eq(registry.responders(), clone.responders()));
        assert_eq!(registry.snapshot(), clone.snapshot());
    }
}
