use crate::models::Salon;

/// Service category a user can filter the salon listing by.
///
/// `slug()` is matched as a case-insensitive substring against each
/// service's free-text category label, so `Hair` matches both "Hair
/// Styling" and "Hair Styling & Color".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceCategory {
    #[default]
    All,
    Hair,
    Nails,
    Face,
}

impl ServiceCategory {
    /// Categories in the order the filter buttons are rendered.
    pub const ALL: &'static [ServiceCategory] = &[
        ServiceCategory::All,
        ServiceCategory::Hair,
        ServiceCategory::Nails,
        ServiceCategory::Face,
    ];

    /// Needle used for substring matching against service categories.
    pub fn slug(&self) -> &'static str {
        match self {
            ServiceCategory::All => "all",
            ServiceCategory::Hair => "hair",
            ServiceCategory::Nails => "nails",
            ServiceCategory::Face => "face",
        }
    }

    /// Caption shown on the filter button.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::All => "All Services",
            ServiceCategory::Hair => "Hair Styling",
            ServiceCategory::Nails => "Nails",
            ServiceCategory::Face => "Face & Body",
        }
    }
}

/// Derive the visible subset of `salons` for the active category.
///
/// `All` is the identity. Any other category keeps a salon when at least
/// one of its services has a category label containing the category slug,
/// case-insensitively. Relative order is preserved; salons without
/// services never match a non-`All` filter.
pub fn filter_salons(salons: &[Salon], active: ServiceCategory) -> Vec<Salon> {
    if active == ServiceCategory::All {
        return salons.to_vec();
    }

    let needle = active.slug();
    salons
        .iter()
        .filter(|salon| {
            salon
                .services
                .iter()
                .any(|service| service.category.to_lowercase().contains(needle))
        })
        .cloned()
        .collect()
}
