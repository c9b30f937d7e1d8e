use crate::api::{load_error_message, SalonApi};
use crate::categories::{filter_salons, ServiceCategory};
use crate::models::Salon;
use crate::ui::components::salon_card::SalonCard;
use dioxus::prelude::*;
use tracing::debug;

/// Recommended salons listing page
///
/// Fetches the full salon collection once on mount and filters it
/// client-side by the active service category. The filter buttons stay
/// interactive while the fetch is in flight.
#[component]
pub fn Recommended() -> Element {
    debug!("Component rendering");
    let api = use_context::<SalonApi>();
    let mut salons = use_signal(Vec::<Salon>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let active_category = use_signal(ServiceCategory::default);

    // Load the salon collection on component mount
    use_effect(move || {
        debug!("Starting salon fetch effect");
        let api = api.clone();
        spawn(async move {
            loading.set(true);
            error.set(None);

            match api.get_salons().await {
                Ok(listing) => {
                    // A payload without the salons field is "no update",
                    // not a failure
                    if let Some(list) = listing.salons {
                        salons.set(list);
                    }
                }
                Err(e) => {
                    error.set(Some(load_error_message(&e)));
                }
            }

            loading.set(false);
        });
    });

    // Derived per render, never cached
    let filtered = filter_salons(&salons.read(), active_category());

    rsx! {
        main { class: "min-h-screen bg-gray-50",
            div { class: "max-w-7xl mx-auto px-4 py-8",
                section { class: "mb-12",
                    h1 { class: "text-3xl font-bold text-gray-800 mb-6", "Recommended For You" }

                    CategoryFilterBar { active_category }

                    if loading() {
                        div { class: "flex justify-center items-center py-12",
                            div { class: "animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-pink-500" }
                        }
                    } else if let Some(err) = error() {
                        div { class: "bg-red-50 text-red-600 p-4 rounded-lg mb-6", "{err}" }
                    } else if filtered.is_empty() {
                        EmptyState {}
                    } else {
                        div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                            for salon in filtered {
                                SalonCard { key: "{salon.id}", salon: salon.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Row of category filter buttons, one per [`ServiceCategory`].
#[component]
fn CategoryFilterBar(mut active_category: Signal<ServiceCategory>) -> Element {
    rsx! {
        div { class: "flex flex-wrap gap-3 mb-8",
            for category in ServiceCategory::ALL.iter().copied() {
                button {
                    class: if active_category() == category {
                        "px-5 py-2 rounded-full font-medium text-sm transition-colors bg-pink-600 text-white"
                    } else {
                        "px-5 py-2 rounded-full font-medium text-sm transition-colors bg-white text-gray-700 hover:bg-pink-50"
                    },
                    onclick: move |_| active_category.set(category),
                    {category.label()}
                }
            }
        }
    }
}

/// Panel shown when the active filter matches no salons.
#[component]
fn EmptyState() -> Element {
    rsx! {
        div { class: "text-center py-12 bg-white rounded-xl shadow-md",
            div { class: "text-gray-300 text-6xl mb-4", "💇" }
            h2 { class: "text-xl font-semibold text-gray-700", "No salons found" }
            p { class: "text-gray-500 mt-2", "Try adjusting your filter criteria" }
        }
    }
}
