use crate::models::{Salon, Service};
use crate::ui::Route;
use dioxus::prelude::*;

/// How many service tags a card shows before collapsing into "+N more".
const VISIBLE_SERVICE_TAGS: usize = 3;

/// Where a card's cover image comes from, in fallback order:
/// first gallery image, then logo, then a generated placeholder showing
/// the salon name's first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardImage {
    Url(String),
    Placeholder(String),
}

pub fn card_image(salon: &Salon) -> CardImage {
    if let Some(first) = salon.gallery.as_ref().and_then(|g| g.first()) {
        return CardImage::Url(first.clone());
    }
    if let Some(logo) = &salon.logo {
        return CardImage::Url(logo.clone());
    }
    let initial = salon.name.chars().next().map(String::from).unwrap_or_default();
    CardImage::Placeholder(initial)
}

/// First [`VISIBLE_SERVICE_TAGS`] service names plus an overflow tag when
/// there are more.
pub fn service_tags(services: &[Service]) -> (Vec<String>, Option<String>) {
    let visible = services
        .iter()
        .take(VISIBLE_SERVICE_TAGS)
        .map(|s| s.name.clone())
        .collect();
    let overflow = if services.len() > VISIBLE_SERVICE_TAGS {
        Some(format!("+{} more", services.len() - VISIBLE_SERVICE_TAGS))
    } else {
        None
    };
    (visible, overflow)
}

/// Individual salon card linking to the salon's detail page.
#[component]
pub fn SalonCard(salon: Salon) -> Element {
    let salon_id = salon.id.clone();
    let salon_name = salon.name.clone();
    let image = card_image(&salon);
    let (tags, overflow_tag) = service_tags(&salon.services);
    // Rendered only when present and non-zero
    let rating = salon.rating.filter(|r| *r > 0.0);

    rsx! {
        div {
            class: "bg-white rounded-xl shadow-sm hover:shadow-md transition-shadow overflow-hidden group cursor-pointer",
            onclick: {
                let navigator = navigator();
                move |_| {
                    navigator.push(Route::SalonDetail {
                        salon_id: salon_id.clone(),
                    });
                }
            },

            // Cover image with rating badge overlay
            div { class: "h-48 relative",
                match &image {
                    CardImage::Url(url) => rsx! {
                        img {
                            src: "{url}",
                            alt: "{salon_name}",
                            class: "w-full h-full object-cover group-hover:scale-105 transition-transform duration-300",
                        }
                    },
                    CardImage::Placeholder(initial) => rsx! {
                        div { class: "h-full w-full bg-gradient-to-br from-pink-100 to-pink-300 flex items-center justify-center",
                            span { class: "text-5xl font-extrabold text-white", "{initial}" }
                        }
                    },
                }

                if let Some(rating) = rating {
                    div { class: "absolute top-2 right-2 bg-white bg-opacity-90 rounded-full px-2 py-1 flex items-center shadow-sm",
                        span { class: "text-yellow-500 mr-1", "★" }
                        span { class: "text-sm font-medium", {format!("{rating:.1}")} }
                    }
                }
            }

            // Salon info
            div { class: "p-5",
                h3 { class: "font-bold text-gray-800 text-lg mb-1", "{salon.name}" }

                if let Some(slogan) = &salon.slogan {
                    p { class: "text-gray-600 text-sm italic mb-3 truncate", "{slogan}" }
                }

                div { class: "flex flex-wrap gap-2 mb-3",
                    for tag in tags {
                        span { class: "px-2 py-1 bg-pink-50 text-pink-600 rounded-full text-xs", "{tag}" }
                    }
                    if let Some(more) = overflow_tag {
                        span { class: "px-2 py-1 bg-gray-50 text-gray-500 rounded-full text-xs", "{more}" }
                    }
                }

                div { class: "flex items-center text-gray-600 text-sm",
                    span { class: "truncate", "{salon.address}, {salon.city}" }
                }
            }
        }
    }
}
