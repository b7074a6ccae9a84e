use super::Engine;

use async_trait::async_trait;

use crate::{
    api::{ImportAPI, RouteAPI},
    entities::{Route, RouteType},
    error::{invalid_input_error, Error},
    geo, gpx,
};

#[async_trait]
impl ImportAPI for Engine {
    #[tracing::instrument(skip(self, document))]
    async fn import_gpx(
        &self,
        name: String,
        document: String,
        route_type: RouteType,
    ) -> Result<Option<Route>, Error> {
        let name = name.trim().to_string();

        if name.is_empty() {
            return Err(invalid_input_error());
        }

        let points = gpx::parse_track_points(&document);

        if points.is_empty() {
            tracing::warn!("nothing to import: document has no usable track points");
            return Ok(None);
        }

        let distance = geo::path_length(&points);
        let route = self
            .save_route(Route::new(name, points, distance, route_type))
            .await?;

        tracing::info!(%route.id, "GPX track imported");

        Ok(Some(route))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        api::{ImportAPI, RouteAPI},
        engine::test_engine,
        entities::RouteType,
    };

    const DOCUMENT: &str = r#"<?xml version="1.0"?>
        <gpx version="1.1"><trk><trkseg>
            <trkpt lat="40.0" lon="-3.0"/>
            <trkpt lat="40.1" lon="-3.1"/>
        </trkseg></trk></gpx>"#;

    #[test]
    fn importing_a_track_persists_a_route() {
        tokio_test::block_on(async {
            let engine = test_engine().await;

            let route = engine
                .import_gpx("Camino import".into(), DOCUMENT.into(), RouteType::Hiking)
                .await
                .unwrap()
                .unwrap();

            assert_eq!(route.name, "Camino import");
            assert_eq!(route.points.len(), 2);
            assert!(route.distance > 0);

            assert_eq!(engine.list_routes().await.unwrap(), vec![route]);
        })
    }

    #[test]
    fn importing_an_empty_document_saves_nothing() {
        tokio_test::block_on(async {
            let engine = test_engine().await;

            let imported = engine
                .import_gpx("empty".into(), "<gpx></gpx>".into(), RouteType::Hiking)
                .await
                .unwrap();

            assert_eq!(imported, None);
            assert!(engine.list_routes().await.unwrap().is_empty());
        })
    }

    #[test]
    fn importing_without_a_name_is_an_input_error() {
        tokio_test::block_on(async {
            let engine = test_engine().await;

            let err = engine
                .import_gpx("  ".into(), DOCUMENT.into(), RouteType::Hiking)
                .await
                .unwrap_err();
            assert_eq!(err.code, 101);
        })
    }
}
