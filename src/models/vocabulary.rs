//! Choice lists offered by the input form.
//!
//! Scoring never checks membership in these lists. They exist so that
//! collaborators can offer sensible choices when building a [`FarmInput`].
//!
//! [`FarmInput`]: crate::models::FarmInput

pub const SOIL_TYPES: &[&str] = &[
    "Clay",
    "Sandy",
    "Loamy",
    "Silty",
    "Peaty",
    "Chalky",
    "Clayey loam",
];

pub const IRRIGATION_METHODS: &[&str] = &[
    "Drip irrigation",
    "Sprinkler irrigation",
    "Flood irrigation",
    "Center pivot irrigation",
    "Furrow irrigation",
    "Subsurface irrigation",
];

pub const FERTILIZER_TYPES: &[&str] = &[
    "Organic compost",
    "NPK 10-10-10",
    "NPK 15-15-15",
    "Urea",
    "Ammonium nitrate",
    "Phosphate",
    "Potash",
    "Foliar spray",
    "Manure",
];

pub const CROP_VARIETIES: &[(&str, &[&str])] = &[
    (
        "Wheat",
        &["Hard Red Winter", "Soft White", "Durum", "Spring Wheat"],
    ),
    ("Corn", &["Sweet Corn", "Field Corn", "Popcorn", "Dent Corn"]),
    (
        "Rice",
        &["Basmati", "Jasmine", "Arborio", "Long Grain", "Short Grain"],
    ),
    ("Cotton", &["Upland", "Pima", "Egyptian", "Sea Island"]),
    (
        "Soybeans",
        &["Group 1 Maturity", "Group 2 Maturity", "Group 3 Maturity"],
    ),
    ("Potatoes", &["Russet", "Red", "White", "Yellow", "Purple"]),
];

pub const GROWTH_STAGES: &[&str] = &[
    "Germination",
    "Seedling",
    "Vegetative",
    "Flowering",
    "Fruiting",
    "Maturity",
    "Harvesting",
];

pub const HEALTH_STATUSES: &[&str] = &[
    "Excellent",
    "Good",
    "Fair",
    "Poor",
    "Diseased",
    "Pest-infested",
    "Nutrient deficient",
];

pub fn crop_names() -> Vec<&'static str> {
    CROP_VARIETIES.iter().map(|(name, _)| *name).collect()
}

/// Varieties for a crop, matched case-insensitively. Unknown crops have none.
pub fn varieties_for(crop: &str) -> &'static [&'static str] {
    let crop = crop.trim();
    CROP_VARIETIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(crop))
        .map(|(_, varieties)| *varieties)
        .unwrap_or(&[])
}

/// Position of `value` in `options`, ignoring case. Used to pre-select
/// form defaults.
pub fn position_of(options: &[&str], value: &str) -> Option<usize> {
    options.iter().position(|o| o.eq_ignore_ascii_case(value))
}
