//! The application's route table.

use route_nexus::{AppRouter, RouteEntry};

use crate::pages::View;

/// Every navigable page, in registration order.
pub fn build_routes() -> Vec<RouteEntry<View>> {
    vec![
        RouteEntry::new("/", "home", View::HomeView),
        RouteEntry::new("/clustermap", "ClusterMap", View::ClusterMap),
        RouteEntry::new("/vectormap", "VectorMap", View::VectorMap),
        RouteEntry::new("/featuremap", "FeatureMap", View::FeatureMap),
        RouteEntry::new("/measuremap", "MeasureMap", View::MeasureMap),
        RouteEntry::new("/newmeasuremap", "NewMeasureMap", View::NewMeasureMap),
        RouteEntry::new("/basemap", "BaseMap", View::BaseMap),
        RouteEntry::new("/testmap", "TestMap", View::TestMap),
    ]
}

/// Build the history router for the route table, mounted under `base_url`.
pub fn create_app_router(base_url: &str) -> route_nexus::Result<AppRouter<View>> {
    AppRouter::new(base_url, build_routes())
}

/// Name of the route `offset` places away from `name` in table order, wrapping around.
pub fn step_from(name: &str, offset: isize) -> Option<String> {
    let routes = build_routes();
    let index = routes.iter().position(|entry| entry.name() == name)?;
    let len = routes.len() as isize;
    let target = (index as isize + offset).rem_euclid(len) as usize;
    Some(routes[target].name().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_eight_unique_entries() {
        let routes = build_routes();
        assert_eq!(routes.len(), 8);

        let paths: HashSet<_> = routes.iter().map(|e| e.path()).collect();
        let names: HashSet<_> = routes.iter().map(|e| e.name()).collect();
        assert_eq!(paths.len(), 8);
        assert_eq!(names.len(), 8);

        for entry in &routes {
            assert!(entry.path().starts_with('/'), "{} lacks a leading slash", entry.path());
            assert!(!entry.name().is_empty());
        }
    }

    #[test]
    fn test_table_order() {
        let names: Vec<_> = build_routes().iter().map(|e| e.name().to_string()).collect();
        assert_eq!(
            names,
            [
                "home",
                "ClusterMap",
                "VectorMap",
                "FeatureMap",
                "MeasureMap",
                "NewMeasureMap",
                "BaseMap",
                "TestMap",
            ]
        );
    }

    #[test]
    fn test_name_and_path_lookup_agree() {
        let router = create_app_router("/").unwrap();
        let table = router.routes();

        for entry in table {
            assert_eq!(table.by_name(entry.name()), table.by_path(entry.path()));
        }
        assert_eq!(table.by_name("BaseMap").unwrap().path(), "/basemap");
        assert_eq!(table.by_path("/basemap").unwrap().name(), "BaseMap");
    }

    #[test]
    fn test_mounted_under_base() {
        let mut router = create_app_router("/app/").unwrap();
        assert_eq!(router.root(), "/app/");

        let entry = router.visit("/app/vectormap").unwrap();
        assert_eq!(entry.name(), "VectorMap");
        assert_eq!(router.current_view(), Some(View::VectorMap));
        assert_eq!(router.href("MeasureMap").unwrap(), "/app/measuremap");
    }

    #[test]
    fn test_deep_link_with_url_in_query_or_hash() {
        let mut router = create_app_router("/app/").unwrap();
        for url in [
            "/app/vectormap?next=https://example.com/login",
            "/app/vectormap#https://x/y",
        ] {
            assert_eq!(router.resolve(url).map(|e| e.name()), Some("VectorMap"));
            assert_eq!(router.visit(url).map(|e| e.view()), Some(View::VectorMap));
            assert_eq!(router.current().path(), "/vectormap");
        }
    }

    #[test]
    fn test_unregistered_path_matches_nothing() {
        let mut router = create_app_router("/app/").unwrap();
        assert!(router.resolve("/app/nosuchmap").is_none());
        assert!(router.visit("/app/nosuchmap").is_none());
        assert_eq!(router.current().path(), "/nosuchmap");
        assert!(router.current_view().is_none());
    }

    #[test]
    fn test_build_routes_is_idempotent() {
        let first = build_routes();
        let second = build_routes();
        assert_eq!(first, second);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.view(), b.view());
            assert!(!std::ptr::eq(a, b));
        }
    }

    #[test]
    fn test_step_from_wraps() {
        assert_eq!(step_from("VectorMap", 1).as_deref(), Some("FeatureMap"));
        assert_eq!(step_from("TestMap", 1).as_deref(), Some("home"));
        assert_eq!(step_from("home", -1).as_deref(), Some("TestMap"));
        assert_eq!(step_from("Atlas", 1), None);
    }
}
