pub mod navbar;
pub mod recommended;
pub mod salon_card;
pub mod salon_detail;

pub use navbar::Navbar;
pub use recommended::Recommended;
pub use salon_card::SalonCard;
pub use salon_detail::SalonDetail;
