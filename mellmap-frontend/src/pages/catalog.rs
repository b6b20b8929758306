use std::rc::Rc;

use leptos::*;

use mellmap_boundary::{Place, PlaceId, PlaceSummary, RandomMatchQuery};
use mellmap_core::{
    district,
    filter::{filter_places, PlaceFilter},
    geo::find_place,
    overlay::Overlays,
    task::Generation,
};
use mellmap_frontend_api::{PlacesApi, DEFAULT_RANDOM_COUNT};

use crate::{components::*, dialog};

#[component]
pub fn Catalog(places_api: PlacesApi) -> impl IntoView {
    // -- signals -- //

    let places = create_rw_signal(Vec::<Place>::new());
    let random_picks = create_rw_signal(Vec::<PlaceSummary>::new());
    let filter = create_rw_signal(PlaceFilter::default());
    let overlays = create_rw_signal(Overlays::default());
    let loads = Rc::new(Generation::default());

    // -- memos -- //

    let filtered_places =
        create_memo(move |_| places.with(|all| filter.with(|filter| filter_places(all, filter))));
    let districts = create_memo(move |_| {
        places.with(|all| district::choices(all.iter().map(|p| p.district.as_str())))
    });
    let detail = create_memo(move |_| overlays.with(|o| o.detail().cloned()));
    let zoomed_photo = create_memo(move |_| overlays.with(|o| o.zoomed_photo().map(ToOwned::to_owned)));

    // -- actions -- //

    let fetch_places = create_action({
        let loads = Rc::clone(&loads);
        move |(): &()| {
            let loads = Rc::clone(&loads);
            let ticket = loads.begin();
            async move {
                let result = places_api.places().await;
                if !loads.is_current(ticket) {
                    log::debug!("Ignore stale response of places");
                    return;
                }
                match result {
                    Ok(list) => {
                        log::info!("Loaded {} places", list.len());
                        places.set(list);
                    }
                    Err(err) => {
                        log::error!("Unable to load places: {err}");
                        dialog::alert("Не удалось загрузить заведения");
                    }
                }
            }
        }
    });

    let fetch_random_picks = create_action({
        let loads = Rc::clone(&loads);
        move |(): &()| {
            let loads = Rc::clone(&loads);
            async move {
                let result = places_api.random_places(DEFAULT_RANDOM_COUNT).await;
                if loads.is_closed() {
                    return;
                }
                match result {
                    Ok(picks) => random_picks.set(picks),
                    Err(err) => log::warn!("Unable to fetch random places: {err}"),
                }
            }
        }
    });

    let pick_random_match = create_action({
        let loads = Rc::clone(&loads);
        move |query: &RandomMatchQuery| {
            let loads = Rc::clone(&loads);
            let query = query.clone();
            async move {
                let result = places_api.random_matching_place(&query).await;
                if loads.is_closed() {
                    return;
                }
                match result {
                    Ok(place) => {
                        log::debug!("Random match: {}", place.name);
                        overlays.update(|o| o.show_detail(place));
                    }
                    Err(err) => {
                        log::warn!("Unable to pick a random place: {err}");
                        let message = err
                            .api_message()
                            .unwrap_or("Не удалось подобрать заведение");
                        dialog::alert(message);
                    }
                }
            }
        }
    });

    fetch_places.dispatch(());
    fetch_random_picks.dispatch(());

    // -- callbacks -- //

    let on_select = Callback::new(move |place: Place| {
        overlays.update(|o| o.show_detail(place));
    });

    let on_pick = Callback::new(move |id: PlaceId| {
        match places.with_untracked(|all| find_place(all, id).cloned()) {
            Some(place) => on_select.call(place),
            None => log::warn!("Picked place {id} is not loaded"),
        }
    });

    let on_lucky = Callback::new(move |()| {
        let query = filter.with_untracked(PlaceFilter::to_random_match_query);
        pick_random_match.dispatch(query);
    });

    let on_close_detail = Callback::new(move |()| overlays.update(Overlays::close_detail));
    let on_zoom = Callback::new(move |photo: String| overlays.update(|o| o.zoom(photo)));
    let on_close_zoom = Callback::new(move |()| overlays.update(Overlays::close_zoom));

    // -- global listeners -- //

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() != "Escape" {
            return;
        }
        overlays.update(|o| {
            if o.dismiss_on_cancel_key() {
                log::debug!("Dismissed overlays");
            }
        });
    });

    on_cleanup(move || {
        loads.invalidate();
        keydown.remove();
    });

    view! {
      <section class="flex flex-col h-screen">
        <FilterBar
          filter
          districts = districts.into()
          on_lucky
          lucky_pending = pick_random_match.pending().into()
        />
        <RandomPicks picks = random_picks.into() on_select = on_pick />
        <div class="flex-1 relative">
          <PlacesMap places = filtered_places.into() on_select />
        </div>
        { move || detail.get().map(|place| view! {
            <DetailPanel place on_close = on_close_detail on_zoom />
          })
        }
        { move || zoomed_photo.get().map(|photo| view! {
            <ZoomOverlay photo on_close = on_close_zoom />
          })
        }
      </section>
    }
}
