use serde::{Deserialize, Serialize};

/// A single product specification record as it appears in `specs.json`.
///
/// Every field is an opaque display string. Field content is independently
/// optional: an absent key deserializes to the empty string and renders as an
/// empty cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub model: String,

    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub release_date: String,

    #[serde(default)]
    pub display: String,

    #[serde(default)]
    pub processor: String,

    #[serde(default)]
    pub graphics: String,

    #[serde(default)]
    pub ram: String,

    #[serde(default)]
    pub storage: String,

    #[serde(default)]
    pub os_original: String,

    #[serde(default)]
    pub os_max: String,

    #[serde(default)]
    pub battery: String,

    #[serde(default)]
    pub camera_rear: String,

    #[serde(default)]
    pub camera_front: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": "iphone-15",
            "category": "Smartphones",
            "model": "iPhone 15",
            "image": "img/iphone-15.webp",
            "release_date": "September 2023",
            "display": "6.1\" OLED",
            "processor": "A16 Bionic",
            "graphics": "5-core GPU",
            "ram": "6 GB",
            "storage": "128/256/512 GB",
            "os_original": "iOS 17",
            "os_max": "iOS 18",
            "battery": "3349 mAh",
            "camera_rear": "48 MP + 12 MP",
            "camera_front": "12 MP"
        }"#;

        let record: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "iphone-15");
        assert_eq!(record.category, "Smartphones");
        assert_eq!(record.model, "iPhone 15");
        assert_eq!(record.camera_front, "12 MP");
    }

    #[test]
    fn test_absent_keys_default_to_empty() {
        let json = r#"{"id": "x", "category": "Tablets", "model": "X"}"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.display, "");
        assert_eq!(record.battery, "");
        assert_eq!(record.camera_rear, "");
    }
}
