use leptos::*;

use mellmap_core::carousel::{slides, Carousel, NO_PHOTO_ALT};

#[component]
pub fn PhotoCarousel(photos: Vec<String>, on_zoom: Callback<String>) -> impl IntoView {
    let carousel = Carousel::new(photos.len());
    let has_controls = carousel.has_controls();
    let carousel = create_rw_signal(carousel);
    let indices = (0..photos.len()).collect::<Vec<_>>();

    let images = slides(&photos)
        .into_iter()
        .enumerate()
        .map(|(i, src)| {
            if !has_controls {
                return view! { <img class="active" src=src alt=NO_PHOTO_ALT /> }.into_view();
            }
            let zoom_src = src.clone();
            view! {
              <img
                src=src
                class:active=move || carousel.with(|c| c.is_active(i))
                on:click=move |_| on_zoom.call(zoom_src.clone())
              />
            }
            .into_view()
        })
        .collect_view();

    view! {
      <div class="photo-carousel">
        { images }
        <Show when=move || has_controls>
          <div class="carousel-controls">
            <button class="carousel-btn" on:click=move |_| carousel.update(Carousel::prev)>"‹"</button>
            <button class="carousel-btn" on:click=move |_| carousel.update(Carousel::next)>"›"</button>
          </div>
          <div class="carousel-indicators">
            <For
              each={
                let indices = indices.clone();
                move || indices.clone()
              }
              key=|i| *i
              let:i
            >
              <div
                class="carousel-indicator"
                class:active=move || carousel.with(|c| c.is_active(i))
                on:click=move |_| carousel.update(|c| c.set_active(i))
              ></div>
            </For>
          </div>
        </Show>
      </div>
    }
}
