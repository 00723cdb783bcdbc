//! Page views, one per route.

pub mod home;
pub mod maps;

pub use home::HomePage;
pub use maps::{
    BaseMapPage, ClusterMapPage, FeatureMapPage, MeasureMapPage, NewMeasureMapPage, TestMapPage,
    VectorMapPage,
};

route_nexus::define_views! {
    HomeView => HomePage,
    ClusterMap => ClusterMapPage,
    VectorMap => VectorMapPage,
    FeatureMap => FeatureMapPage,
    MeasureMap => MeasureMapPage,
    NewMeasureMap => NewMeasureMapPage,
    BaseMap => BaseMapPage,
    TestMap => TestMapPage,
}
