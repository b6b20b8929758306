use leptos::*;
use leptos_leaflet::{position, MapContainer, Marker, MouseEvents, Position, TileLayer};

use mellmap_boundary::{Place, PlaceId};
use mellmap_core::geo::{find_place, map_markers, MapPoint, PlaceMarker};

const TILE_LAYER_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
const MAP_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
const DEFAULT_CENTER: MapPoint = MapPoint::from_lat_lng_deg(55.7558, 37.6176);
const DEFAULT_ZOOM: f64 = 11.0;

#[component]
pub fn PlacesMap(places: Signal<Vec<Place>>, on_select: Callback<Place>) -> impl IntoView {
    let markers = create_memo(move |_| places.with(|places| map_markers(places)));

    let select_place = move |id: PlaceId| {
        let Some(place) = places.with_untracked(|places| find_place(places, id).cloned()) else {
            log::warn!("No place with ID {id} found");
            return;
        };
        on_select.call(place);
    };

    Effect::new(move |_| {
        log::debug!("Render {} markers", markers.with(Vec::len));
    });

    let MapPoint { lat, lng } = DEFAULT_CENTER;
    let center = Position::new(lat, lng);

    view! {
      <MapContainer
        class="h-full"
        center
        zoom=DEFAULT_ZOOM
        set_view=true
      >
        <TileLayer url=TILE_LAYER_URL attribution=MAP_ATTRIBUTION />
        <For
          each=move || markers.get()
          key=|PlaceMarker { place_id, pos }| (*place_id, pos.lat.to_bits(), pos.lng.to_bits())
          let:marker
        >
          <Marker
            position=position!(marker.pos.lat, marker.pos.lng)
            mouse_events=MouseEvents::new().on_click(move |_| select_place(marker.place_id))
          />
        </For>
      </MapContainer>
    }
}
