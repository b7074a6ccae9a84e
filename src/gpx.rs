use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::entities::Coordinates;

/// Extracts every `trkpt` from a GPX document, in document order.
///
/// Points missing a `lat` or `lon` attribute, or carrying a non-numeric
/// value, are skipped. A document that fails to parse yields an empty
/// vector rather than an error.
pub fn parse_track_points(document: &str) -> Vec<Coordinates> {
    let mut reader = Reader::from_str(document);
    let mut points = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) | Ok(Event::Empty(element)) => {
                if element.name().as_ref() == b"trkpt" {
                    if let Some(point) = read_track_point(&element) {
                        points.push(point);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                tracing::warn!("malformed GPX document: {}", err);
                return Vec::new();
            }
        }
    }

    points
}

fn read_track_point(element: &BytesStart) -> Option<Coordinates> {
    let mut latitude = None;
    let mut longitude = None;

    for attribute in element.attributes() {
        let attribute = attribute.ok()?;
        let value = attribute.unescape_value().ok()?;

        match attribute.key.as_ref() {
            b"lat" => latitude = value.parse().ok(),
            b"lon" => longitude = value.parse().ok(),
            _ => {}
        }
    }

    Some(Coordinates {
        latitude: latitude?,
        longitude: longitude?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_track_points_in_document_order() {
        let document = r#"<?xml version="1.0"?>
            <gpx version="1.1">
              <trk><trkseg>
                <trkpt lat="40.0" lon="-3.0"><ele>600</ele></trkpt>
                <trkpt lat="40.1" lon="-3.1"/>
                <trkpt lat="40.2" lon="-3.2"/>
              </trkseg></trk>
            </gpx>"#;

        let points = parse_track_points(document);

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].latitude, 40.0);
        assert_eq!(points[0].longitude, -3.0);
        assert_eq!(points[2].latitude, 40.2);
    }

    #[test]
    fn skips_points_missing_an_attribute() {
        let document = r#"<gpx><trk><trkseg>
            <trkpt lat="40.0" lon="-3.0"/>
            <trkpt lat="40.1"/>
            <trkpt lat="40.2" lon="-3.2"/>
            <trkpt lat="40.3" lon="-3.3"/>
        </trkseg></trk></gpx>"#;

        let points = parse_track_points(document);

        assert_eq!(points.len(), 3);
        assert_eq!(points[1].latitude, 40.2);
    }

    #[test]
    fn skips_points_with_non_numeric_values() {
        let document = r#"<gpx><trk><trkseg>
            <trkpt lat="forty" lon="-3.0"/>
            <trkpt lat="40.1" lon="-3.1"/>
        </trkseg></trk></gpx>"#;

        let points = parse_track_points(document);

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].latitude, 40.1);
    }

    #[test]
    fn malformed_document_yields_no_points() {
        let document = r#"<gpx><trk><trkpt lat="40.0" lon="-3.0"/></trk"#;

        assert!(parse_track_points(document).is_empty());
    }

    #[test]
    fn document_without_track_points_yields_no_points() {
        assert!(parse_track_points("<gpx><wpt lat=\"1\" lon=\"2\"/></gpx>").is_empty());
    }
}
