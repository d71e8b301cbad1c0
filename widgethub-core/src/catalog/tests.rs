//! Integration tests for the catalog module

#[cfg(test)]
mod integration_tests {
    use crate::catalog::{builtin_catalog, Catalog, CatalogError, Category, Widget};

    fn widget(id: &str, category: &str, to: &str) -> Widget {
        Widget {
            id: id.to_string(),
            img: None,
            name: format!("Widget {id}"),
            description: "Test widget".to_string(),
            tags: vec![],
            category: category.to_string(),
            to: to.to_string(),
        }
    }

    fn category(name: &str, to: &str) -> Category {
        Category {
            icon: "mdi:test".to_string(),
            name: name.to_string(),
            description: "Test category".to_string(),
            to: to.to_string(),
        }
    }

    /// The built-in data must satisfy every catalog invariant
    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = builtin_catalog();
        catalog.validate().unwrap();

        let tree = catalog.tree().unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].category.to, "/parsers");
        assert_eq!(tree[0].widgets[0].name, "NETRIS2");

        let route = catalog.resolve("/parsers/netris2");
        assert_eq!(route.widget.unwrap().id, "1");
        assert_eq!(route.category.unwrap().name, "Device parsers");
    }

    /// Every widget lands in exactly one bucket, under its declared category
    #[test]
    fn test_tree_partitions_widgets() {
        let catalog = Catalog::new(
            vec![category("A", "/a"), category("B", "/b"), category("C", "/c")],
            vec![
                widget("1", "B", "/b/1"),
                widget("2", "A", "/a/2"),
                widget("3", "B", "/b/3"),
                widget("4", "A", "/a/4"),
                widget("5", "B", "/b/5"),
            ],
        );
        catalog.validate().unwrap();

        let tree = catalog.tree().unwrap();

        // C has no widgets and gets no bucket
        let names: Vec<&str> = tree.iter().map(|n| n.category.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);

        let mut seen: Vec<&str> = Vec::new();
        for node in &tree {
            for w in &node.widgets {
                assert_eq!(w.category, node.category.name);
                seen.push(&w.id);
            }
        }
        seen.sort();
        assert_eq!(seen, vec!["1", "2", "3", "4", "5"]);

        let b_ids: Vec<&str> = tree[0].widgets.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(b_ids, vec!["1", "3", "5"]);
    }

    #[test]
    fn test_validate_rejects_broken_catalogs() {
        let cases = vec![
            (
                Catalog::new(vec![category("A", "/a")], vec![widget("1", "Z", "/a/1")]),
                CatalogError::UnknownCategory {
                    name: "Z".to_string(),
                },
            ),
            (
                Catalog::new(
                    vec![category("A", "/a")],
                    vec![widget("1", "A", "/a/1"), widget("2", "A", "/a/1")],
                ),
                CatalogError::DuplicateWidgetPath {
                    path: "/a/1".to_string(),
                },
            ),
            (
                Catalog::new(
                    vec![category("A", "/a")],
                    vec![widget("1", "A", "/a/1"), widget("1", "A", "/a/2")],
                ),
                CatalogError::DuplicateWidgetId {
                    id: "1".to_string(),
                },
            ),
            (
                Catalog::new(vec![category("A", "/a"), category("B", "/a")], vec![]),
                CatalogError::DuplicateCategoryPath {
                    path: "/a".to_string(),
                },
            ),
            (
                Catalog::new(vec![category("A", "/a"), category("A", "/b")], vec![]),
                CatalogError::DuplicateCategoryName {
                    name: "A".to_string(),
                },
            ),
            (
                Catalog::new(vec![category("A", "a")], vec![]),
                CatalogError::NotRootRelative {
                    path: "a".to_string(),
                },
            ),
            (
                Catalog::new(vec![category("A", "/a")], vec![widget("", "A", "/a/1")]),
                CatalogError::EmptyWidgetId {
                    name: "Widget ".to_string(),
                },
            ),
        ];

        for (catalog, expected) in cases {
            assert_eq!(catalog.validate(), Err(expected));
        }
    }

    #[test]
    fn test_validate_rejects_wrong_header() {
        let catalog = Catalog::from_yaml("apiVersion: widgethub.dev/v2\n").unwrap();
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::UnsupportedApiVersion { .. })
        ));

        let catalog = Catalog::from_yaml("kind: Rulebook\n").unwrap();
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::InvalidKind { .. })
        ));
    }
}
