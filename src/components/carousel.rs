//! Carousel Component
//!
//! Auto-advancing image rotator fed by the carousel table.

use gloo_timers::callback::Interval;
use leptos::*;

use crate::state::use_site_data;

const ADVANCE_MS: u32 = 5000;

/// Carousel over the hosted `carousel_items` rows. The owning page is
/// responsible for loading the store.
#[component]
pub fn Carousel() -> impl IntoView {
    let site = use_site_data();
    let items = site.carousel.rows;
    let index = create_rw_signal(0usize);

    let interval = Interval::new(ADVANCE_MS, move || {
        index.update(|index| *index = index.wrapping_add(1));
    });
    on_cleanup(move || drop(interval));

    view! {
        <div class="relative overflow-hidden rounded-xl">
            {move || {
                let items = items.get();
                if items.is_empty() {
                    return view! { <div class="h-64 bg-gray-800 animate-pulse rounded-xl" /> }
                        .into_view();
                }

                let current = items[index.get() % items.len()].clone();
                view! {
                    <figure class="h-64 md:h-96">
                        <img
                            src=current.image_url
                            alt=current.caption.clone().unwrap_or_default()
                            class="w-full h-full object-cover"
                        />
                        {current.caption.map(|caption| view! {
                            <figcaption class="absolute bottom-0 inset-x-0 bg-gray-950/70 px-4 py-3 text-sm text-gray-200">
                                {caption}
                            </figcaption>
                        })}
                    </figure>
                }
                .into_view()
            }}

            // Dots
            <div class="absolute bottom-3 right-4 flex space-x-1">
                {move || {
                    let count = items.get().len();
                    (0..count).map(|i| {
                        let active = move || index.get() % count.max(1) == i;
                        view! {
                            <button
                                class=move || {
                                    if active() {
                                        "w-2 h-2 rounded-full bg-white"
                                    } else {
                                        "w-2 h-2 rounded-full bg-gray-500 hover:bg-gray-300"
                                    }
                                }
                                on:click=move |_| index.set(i)
                            />
                        }
                    }).collect_view()
                }}
            </div>
        </div>
    }
}
