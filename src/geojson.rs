//! GeoJSON export for range circles (requires the "geojson" feature)

use crate::RangeCirclePolygon;
use serde_json::{Value, json};

impl RangeCirclePolygon {
    /// Convert to a GeoJSON `Feature` with a closed `Polygon` geometry
    ///
    /// Coordinates are `[lon, lat]` in degrees (EPSG:4326). The properties
    /// carry the labelling attributes of the circle.
    pub fn to_geojson_feature(&self) -> Value {
        let mut ring: Vec<[f64; 2]> = self
            .vertices
            .iter()
            .map(|vertex| [vertex.lon, vertex.lat])
            .collect();

        // GeoJSON linear rings repeat the first position at the end
        if let Some(first) = ring.first().copied() {
            ring.push(first);
        }

        json!({
            "type": "Feature",
            "geometry": {
                "type": "Polygon",
                "coordinates": [ring]
            },
            "properties": {
                "label": self.label,
                "platform": self.platform,
                "location": self.location,
                "range_nmi": self.range_nmi,
                "range_km": self.range_km,
                "max_range": self.max_range,
                "range_unit": self.range_unit.code()
            }
        })
    }

    /// Wrap the feature in a single-feature `FeatureCollection`
    pub fn to_geojson_feature_collection(&self) -> Value {
        json!({
            "type": "FeatureCollection",
            "features": [self.to_geojson_feature()]
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{GeoPoint, build_range_circle};
    use claims::assert_ok;
    use insta::assert_snapshot;

    #[test]
    fn feature_properties() {
        let origin = GeoPoint::lat_lon(59.503333, -139.660278);
        let (circle, _) = assert_ok!(build_range_circle(origin, "PAYA", "DHC-6", 500.0, "km"));
        let feature = circle.to_geojson_feature();

        assert_eq!(feature["type"], "Feature");
        assert_eq!(feature["geometry"]["type"], "Polygon");
        let properties = &feature["properties"];
        assert_snapshot!(properties["label"].as_str().unwrap(), @"DHC-6 250 km out-and-back range");
        assert_eq!(properties["platform"], "DHC-6");
        assert_eq!(properties["location"], "PAYA");
        assert_eq!(properties["range_km"], 250.0);
        assert_eq!(properties["range_nmi"], circle.range_nmi);
        assert_eq!(properties["max_range"], 500.0);
        assert_eq!(properties["range_unit"], "km");
    }

    #[test]
    fn ring_is_closed_and_lon_lat_ordered() {
        let origin = GeoPoint::lat_lon(59.503333, -139.660278);
        let (circle, _) = assert_ok!(build_range_circle(origin, "PAYA", "DHC-6", 500.0, "km"));
        let feature = circle.to_geojson_feature();

        let ring = feature["geometry"]["coordinates"][0].as_array().unwrap();
        assert_eq!(ring.len(), 361);
        assert_eq!(ring[0], ring[360]);

        let first = &circle.vertices[0];
        assert_eq!(ring[0][0].as_f64(), Some(first.lon));
        assert_eq!(ring[0][1].as_f64(), Some(first.lat));
    }

    #[test]
    fn feature_collection_wraps_one_feature() {
        let origin = GeoPoint::lat_lon(37.082778, -76.360556);
        let (circle, _) = assert_ok!(build_range_circle(origin, "KLFI", "777", 3000.0, "nmi"));
        let collection = circle.to_geojson_feature_collection();

        assert_eq!(collection["type"], "FeatureCollection");
        assert_eq!(collection["features"].as_array().map(Vec::len), Some(1));
        assert_eq!(collection["features"][0], circle.to_geojson_feature());
    }
}
