use crate::ui::Route;
use dioxus::prelude::*;

/// Salon detail page
///
/// Placeholder target for card navigation; profile, gallery and booking
/// live in their own flows and are not part of the listing work.
#[component]
pub fn SalonDetail(salon_id: String) -> Element {
    rsx! {
        div { class: "max-w-7xl mx-auto px-4 py-8",
            Link {
                to: Route::Recommended {},
                class: "text-pink-600 hover:text-pink-700 text-sm",
                "← Back to recommended"
            }
            h1 { class: "text-3xl font-bold text-gray-800 mt-4 mb-2", "Salon profile" }
            p { class: "text-gray-600", "Details for salon {salon_id} will appear here." }
        }
    }
}
