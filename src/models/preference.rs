use crate::constants::DEFAULT_CATEGORY_PROFILE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Thematic trip preference selected by the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Preference {
    Nightlife,
    FamilyFriendly,
    Food,
    Nature,
    Historical,
    Shopping,
    Beach,
    Mountains,
}

impl Preference {
    /// Ordered category terms searched for this preference. Order matters:
    /// bucket assignment is first-match-wins over this sequence.
    pub fn category_terms(&self) -> &'static [&'static str] {
        match self {
            Preference::Nightlife => &["night_club", "bar", "casino", "restaurant"],
            Preference::FamilyFriendly => &["amusement_park", "zoo", "aquarium", "park", "museum"],
            Preference::Food => &["restaurant", "cafe", "bakery", "meal_takeaway"],
            Preference::Nature => &["park", "campground", "natural_feature", "zoo"],
            Preference::Historical => &["museum", "church", "hindu_temple", "mosque", "synagogue"],
            Preference::Shopping => &[
                "shopping_mall",
                "department_store",
                "clothing_store",
                "jewelry_store",
            ],
            Preference::Beach => &["natural_feature", "park", "amusement_park", "restaurant"],
            Preference::Mountains => &["natural_feature", "park", "campground", "rv_park"],
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Preference::Nightlife => "nightlife",
            Preference::FamilyFriendly => "family-friendly",
            Preference::Food => "food",
            Preference::Nature => "nature",
            Preference::Historical => "historical",
            Preference::Shopping => "shopping",
            Preference::Beach => "beach",
            Preference::Mountains => "mountains",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Preference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nightlife" => Ok(Preference::Nightlife),
            "family-friendly" => Ok(Preference::FamilyFriendly),
            "food" => Ok(Preference::Food),
            "nature" => Ok(Preference::Nature),
            "historical" => Ok(Preference::Historical),
            "shopping" => Ok(Preference::Shopping),
            "beach" => Ok(Preference::Beach),
            "mountains" => Ok(Preference::Mountains),
            _ => Err(format!("Unrecognized preference: {}", s)),
        }
    }
}

/// Category terms for a preference label. Unrecognized labels deterministically
/// select the default profile instead of failing.
pub fn profile_for(label: &str) -> &'static [&'static str] {
    label
        .parse::<Preference>()
        .map(|p| p.category_terms())
        .unwrap_or(DEFAULT_CATEGORY_PROFILE)
}

/// Budget tier selected by the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetTier {
    Budget,
    MidRange,
    Luxury,
}

impl BudgetTier {
    pub fn allowed_price_levels(&self) -> &'static [u8] {
        match self {
            BudgetTier::Budget => &[0, 1],
            BudgetTier::MidRange => &[1, 2, 3],
            BudgetTier::Luxury => &[3, 4],
        }
    }
}

impl FromStr for BudgetTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "budget" => Ok(BudgetTier::Budget),
            "mid-range" | "midrange" => Ok(BudgetTier::MidRange),
            "luxury" => Ok(BudgetTier::Luxury),
            _ => Err(format!("Unrecognized budget tier: {}", s)),
        }
    }
}

/// Allowed price levels for a budget label. Unrecognized labels allow
/// every level.
pub fn price_levels_for(label: &str) -> &'static [u8] {
    label
        .parse::<BudgetTier>()
        .map(|b| b.allowed_price_levels())
        .unwrap_or(&[0, 1, 2, 3, 4])
}
