//! Catalog shipped with the site when no catalog file is configured

use super::{Catalog, Category, Widget};

/// The built-in catalog
pub fn builtin_catalog() -> Catalog {
    let categories = vec![Category {
        icon: "mdi:hexadecimal".to_string(),
        name: "Device parsers".to_string(),
        description: "Parsers to decode data from devices and encode data to devices. \
                      Build upon WIKA's javascript parser library"
            .to_string(),
        to: "/parsers".to_string(),
    }];

    let widgets = vec![Widget {
        id: "1".to_string(),
        img: Some("/NETRIS2.png".to_string()),
        name: "NETRIS2".to_string(),
        description: "Decode data from and encode data to NETRIS2 devices".to_string(),
        tags: vec!["NETRIS2".to_string(), "LoRa".to_string()],
        category: "Device parsers".to_string(),
        to: "/parsers/netris2".to_string(),
    }];

    Catalog::new(categories, widgets)
}
