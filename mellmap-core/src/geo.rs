use mellmap_boundary::{Place, PlaceId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    pub lat: f64,
    pub lng: f64,
}

impl MapPoint {
    #[must_use]
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

pub trait Mappable {
    /// `None` if the coordinates are not both finite numbers.
    fn map_point(&self) -> Option<MapPoint>;
}

impl Mappable for Place {
    fn map_point(&self) -> Option<MapPoint> {
        let lat = self.lat.filter(|v| v.is_finite())?;
        let lng = self.lng.filter(|v| v.is_finite())?;
        Some(MapPoint::from_lat_lng_deg(lat, lng))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceMarker {
    pub place_id: PlaceId,
    pub pos: MapPoint,
}

/// One marker per mappable place, in list order.
#[must_use]
pub fn map_markers(places: &[Place]) -> Vec<PlaceMarker> {
    places
        .iter()
        .filter_map(|place| {
            let Some(pos) = place.map_point() else {
                log::debug!("Skip place {} without coordinates", place.id);
                return None;
            };
            Some(PlaceMarker {
                place_id: place.id,
                pos,
            })
        })
        .collect()
}

/// The place a clicked marker (or random pick) refers to.
#[must_use]
pub fn find_place(places: &[Place], id: PlaceId) -> Option<&Place> {
    places.iter().find(|place| place.id == id)
}

#[cfg(test)]
mod tests {
    use mellmap_boundary::builders::*;

    use super::*;

    #[test]
    fn skip_places_without_valid_coordinates() {
        let places = vec![
            Place::build().id(1).pos(Some(55.7), Some(37.6)).finish(),
            Place::build().id(2).pos(None, Some(37.6)).finish(),
            Place::build().id(3).pos(Some(55.7), None).finish(),
            Place::build().id(4).pos(Some(f64::NAN), Some(37.6)).finish(),
            Place::build().id(5).pos(Some(0.0), Some(0.0)).finish(),
        ];
        let markers = map_markers(&places);
        assert_eq!(
            markers.iter().map(|m| m.place_id).collect::<Vec<_>>(),
            vec![1, 5]
        );
        assert_eq!(markers[0].pos, MapPoint::from_lat_lng_deg(55.7, 37.6));
    }

    #[test]
    fn exactly_one_marker_per_mappable_place() {
        let places = (0..10)
            .map(|i| Place::build().id(i).finish())
            .collect::<Vec<_>>();
        assert_eq!(map_markers(&places).len(), 10);
        assert!(map_markers(&[]).is_empty());
    }

    #[test]
    fn marker_click_resolves_its_place() {
        let places = vec![
            Place::build().id(3).name("Ёлки").finish(),
            Place::build().id(8).name("Берлога").pos(None, None).finish(),
        ];
        let marker = &map_markers(&places)[0];
        let place = find_place(&places, marker.place_id).unwrap();
        assert_eq!(place.name, "Ёлки");
        assert!(find_place(&places, 42).is_none());
    }
}
