use shared_types::ResponderCategory;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerIcon {
    pub url: &'static str,
    pub size: (f64, f64),
    pub anchor: (f64, f64),
}

pub const USER_ICON: MarkerIcon = MarkerIcon {
    url: "/images/user.svg",
    size: (25.0, 41.0),
    anchor: (12.0, 41.0),
};

pub const RESPONDER_ICON: MarkerIcon = MarkerIcon {
    url: "/images/responder.svg",
    size: (30.0, 45.0),
    anchor: (15.0, 45.0),
};

pub const AMBULANCE_ICON: MarkerIcon = MarkerIcon {
    url: "/images/ambulance.svg",
    size: (35.0, 50.0),
    anchor: (17.0, 50.0),
};

impl MarkerIcon {
    pub fn for_category(category: ResponderCategory) -> Self {
        match category {
            ResponderCategory::Ambulance => AMBULANCE_ICON,
            ResponderCategory::Generic => RESPONDER_ICON,
        }
    }
}
