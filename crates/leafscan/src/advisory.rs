use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Remedy recommendation for one disease class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub treatment: String,
    pub guidance: String,
}

fn advisories() -> &'static HashMap<&'static str, Advisory> {
    static MAP: OnceLock<HashMap<&'static str, Advisory>> = OnceLock::new();
    MAP.get_or_init(|| {
        let mut map = HashMap::new();
        map.insert(
            "Bacterial Blight",
            Advisory {
                treatment: "Streptocycline (100 ppm) + Copper Oxychloride (0.25%)".to_string(),
                guidance: "Remove and destroy infected leaves. Avoid excess nitrogen."
                    .to_string(),
            },
        );
        map.insert(
            "Red Rot",
            Advisory {
                treatment: "Carbendazim (0.1%) or Trichoderma viride".to_string(),
                guidance: "Improve field drainage. Uproot infected stools. Treat setts before planting."
                    .to_string(),
            },
        );
        map
    })
}

/// Look up the remedy recommendation for a class name.
///
/// Healthy and unknown classes have no advisory.
pub fn advisory_for(class_name: &str) -> Option<&'static Advisory> {
    advisories().get(class_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leafscan_core::ClassCatalog;

    #[test]
    fn disease_classes_have_advisories() {
        let catalog = ClassCatalog::sugarcane();
        for index in 1..catalog.len() {
            let name = catalog.name(index).unwrap();
            assert!(advisory_for(name).is_some(), "missing advisory for {name}");
        }
    }

    #[test]
    fn healthy_has_no_advisory() {
        assert!(advisory_for("Healthy").is_none());
        assert!(advisory_for("no such class").is_none());
    }

    #[test]
    fn red_rot_advisory_names_the_fungicide() {
        let advisory = advisory_for("Red Rot").unwrap();
        assert!(advisory.treatment.contains("Carbendazim"));
    }
}
