use std::rc::Rc;

use leptos::{html::Input, *};
use web_sys::{ScrollBehavior, ScrollToOptions};

use mellmap_boundary::{Place, PlaceId};
use mellmap_core::{
    console::{self, Followup},
    form::{FormSession, SaveRequest},
    photo::screen_photos,
    task::Generation,
};
use mellmap_frontend_api::PlacesApi;

use crate::{components::*, dialog, photo};

fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

#[allow(clippy::too_many_lines)]
#[component]
pub fn Admin(places_api: PlacesApi) -> impl IntoView {
    // -- signals -- //

    let places = create_rw_signal(Vec::<Place>::new());
    let session = create_rw_signal(FormSession::default());
    let file_input = create_node_ref::<Input>();
    let loads = Rc::new(Generation::default());

    // -- signal modifiers -- //

    let reset_form = move || {
        session.set(FormSession::default());
        if let Some(input) = file_input.get_untracked() {
            photo::clear_selection(&input);
        }
    };

    // -- actions -- //

    let reload = create_action({
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

    let open_edit = create_action({
        let loads = Rc::clone(&loads);
        move |id: &PlaceId| {
            let id = *id;
            let loads = Rc::clone(&loads);
            async move {
                let result = places_api.place(id).await;
                if loads.is_closed() {
                    return;
                }
                match result {
                    Ok(place) => {
                        log::debug!("Edit place {id}");
                        reset_form();
                        session.set(FormSession::edit(&place));
                        scroll_to_top();
                    }
                    Err(err) => {
                        log::error!("Unable to load place {id}: {err}");
                        dialog::alert("Не удалось загрузить заведение");
                    }
                }
            }
        }
    });

    let delete_place = create_action({
        let loads = Rc::clone(&loads);
        move |id: &PlaceId| {
            let id = *id;
            let loads = Rc::clone(&loads);
            async move {
                match places_api.delete_place(id).await {
                    Ok(()) => {
                        log::info!("Deleted place {id}");
                        dialog::alert("Заведение удалено!");
                        if loads.is_closed() {
                            return;
                        }
                        match console::finish_delete(id) {
                            Followup::ReloadList => reload.dispatch(()),
                        }
                    }
                    Err(err) => {
                        log::error!("Unable to delete place {id}: {err}");
                        dialog::alert("Ошибка при удалении");
                    }
                }
            }
        }
    });

    let submit = create_action({
        let loads = Rc::clone(&loads);
        move |(): &()| {
            let loads = Rc::clone(&loads);
            let current = session.get_untracked();
            let files = file_input
                .get_untracked()
                .map(|input| photo::selected_files(&input))
                .unwrap_or_default();
            async move {
                if let Err(err) = current.form.coordinates() {
                    log::info!("Rejected form: {err}");
                    dialog::alert(&err.to_string());
                    return;
                }
                let screening = screen_photos(files);
                for rejection in &screening.rejected {
                    dialog::alert(&rejection.to_string());
                }
                let uploaded = photo::reencode_photos(screening.accepted).await;
                let request = match current.save_request(uploaded) {
                    Ok(request) => request,
                    Err(err) => {
                        dialog::alert(&err.to_string());
                        return;
                    }
                };
                let result = match &request {
                    SaveRequest::Create(place) => places_api.create_place(place).await,
                    SaveRequest::Update(id, place) => places_api.update_place(*id, place).await,
                };
                match result {
                    Ok(()) => {
                        log::info!("Saved place \"{}\"", current.form.name.trim());
                        dialog::alert("Заведение сохранено!");
                        if loads.is_closed() {
                            return;
                        }
                        let followup = session.try_update(|s| console::finish_save(s, &request));
                        if let Some(input) = file_input.get_untracked() {
                            photo::clear_selection(&input);
                        }
                        match followup {
                            Some(Followup::ReloadList) => reload.dispatch(()),
                            None => log::warn!("Form state is gone"),
                        }
                    }
                    Err(err) => {
                        log::error!("Unable to save place: {err}");
                        dialog::alert("Ошибка при сохранении");
                    }
                }
            }
        }
    });

    reload.dispatch(());

    // -- callbacks -- //

    let on_edit = Callback::new(move |id: PlaceId| open_edit.dispatch(id));

    let on_delete = Callback::new(move |id: PlaceId| {
        if let Some(id) = console::delete_intent(id, dialog::confirm("Удалить это заведение?")) {
            delete_place.dispatch(id);
        }
    });

    let on_submit = Callback::new(move |()| submit.dispatch(()));
    let on_cancel = Callback::new(move |()| reset_form());

    on_cleanup(move || loads.invalidate());

    view! {
      <section class="container mx-auto p-6 space-y-8">
        <PlaceEditor
          session
          file_input
          on_submit
          on_cancel
          saving = submit.pending().into()
        />
        <PlaceList places = places.into() on_edit on_delete />
      </section>
    }
}
