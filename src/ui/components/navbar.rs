use crate::ui::Route;
use dioxus::prelude::*;

/// Shared navbar layout wrapping every page.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "bg-white shadow-sm text-gray-800 p-4 flex items-center space-x-6",
            Link {
                to: Route::Recommended {},
                class: "text-pink-600 font-bold text-xl",
                "salonspot"
            }
            Link {
                to: Route::Recommended {},
                class: "hover:text-pink-600 transition-colors",
                "Recommended"
            }
        }

        Outlet::<Route> {}
    }
}
