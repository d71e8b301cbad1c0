//! Loading a catalog file through the configuration and querying it

use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;
use widgethub_core::catalog::Catalog;
use widgethub_core::config::{HubConfig, CONFIG_FILE_NAME};
use widgethub_core::Hub;

const CATALOG: &str = r#"
apiVersion: widgethub.dev/v1
kind: Catalog
categories:
  - icon: mdi:hexadecimal
    name: Device parsers
    description: Parsers to decode data from devices and encode data to devices
    to: /parsers
  - icon: mdi:battery-medium
    name: Battery calculation
    description: Battery life estimation
    to: /battery
widgets:
  - id: "1"
    img: /NETRIS2.png
    name: NETRIS2
    description: Decode data from and encode data to NETRIS2 devices
    tags: [NETRIS2, LoRa]
    category: Device parsers
    to: /parsers/netris2
  - id: "2"
    name: NETRIS2 CIOT
    description: Calculate the remaining battery life of a NETRIS2 CIOT device
    tags: [netris2, LoRa]
    category: Battery calculation
    to: /battery/netris2-ciot
  - id: "3"
    img: /PEW.png
    name: PEW
    description: Decode data from and encode data to PEW devices
    tags: [pew, LoRa]
    category: Device parsers
    to: /parsers/pew
"#;

fn write_project(catalog: &str) -> (TempDir, HubConfig) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("catalog.yaml"), catalog).unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "catalog: catalog.yaml\nsearch:\n  fuzzy: 0.2\n",
    )
    .unwrap();

    let config = HubConfig::load_from_path(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
    (dir, config)
}

#[test]
fn test_hub_from_catalog_file() {
    let (_dir, config) = write_project(CATALOG);
    let hub = Hub::from_config(&config).unwrap();

    let tree = hub.tree();
    assert_eq!(tree.len(), 2);
    assert_eq!(tree[0].category.name, "Device parsers");
    assert_eq!(tree[0].widgets.len(), 2);
    assert_eq!(tree[1].category.name, "Battery calculation");

    for widget in hub.catalog().widgets() {
        let route = hub.resolve(&widget.to);
        assert_eq!(route.widget, Some(widget));
        assert_eq!(route.category.unwrap().name, widget.category);
    }

    let names: Vec<&str> = hub.search("battery").iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec!["NETRIS2 CIOT"]);
    assert_eq!(hub.search("").len(), 3);
}

#[test]
fn test_tree_serializes_flat_category_fields() {
    let (_dir, config) = write_project(CATALOG);
    let hub = Hub::from_config(&config).unwrap();

    let json = serde_json::to_value(hub.tree()).unwrap();
    assert_eq!(json[0]["name"], "Device parsers");
    assert_eq!(json[0]["to"], "/parsers");
    assert_eq!(json[0]["widgets"][1]["id"], "3");
    assert!(json[1]["widgets"][0].get("img").is_none());
}

#[test]
fn test_broken_catalog_file_fails_loudly() {
    let broken = CATALOG.replace("category: Battery calculation", "category: Batteries");
    let (_dir, config) = write_project(&broken);

    let err = Hub::from_config(&config).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Catalog failed validation"));
    assert!(message.contains("Unknown category 'Batteries'"));
}

#[test]
fn test_missing_catalog_file() {
    let dir = TempDir::new().unwrap();
    let config = HubConfig {
        catalog: Some(dir.path().join("missing.yaml")),
        ..HubConfig::default()
    };

    let err = Hub::from_config(&config).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to read catalog"));
}

#[test]
fn test_unparseable_catalog_file_names_the_file_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.yaml");
    fs::write(&path, "widgets: [not: {closed\n").unwrap();

    let err = Catalog::from_file(&path).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.starts_with(&format!("Failed to parse catalog: {}: ", path.display())));
    assert_eq!(message.matches("Failed to parse catalog").count(), 1);
}
