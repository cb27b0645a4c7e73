//! Static lookup tables for place normalization
//!
//! US state names and abbreviations (including spellings common in historical
//! records), the state-to-region assignment, and country name variants. All
//! lookups are case-insensitive and ignore periods, so "Pa.", "PA", and
//! "Pennsylvania" resolve identically.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

/// Canonical country name used for recognized US places
pub const UNITED_STATES: &str = "United States";

/// US census-style regions used for map grouping
const STATE_REGIONS: &[(&str, &[&str])] = &[
    (
        "New England",
        &[
            "Maine",
            "New Hampshire",
            "Vermont",
            "Massachusetts",
            "Rhode Island",
            "Connecticut",
        ],
    ),
    (
        "Mid-Atlantic",
        &[
            "New York",
            "New Jersey",
            "Pennsylvania",
            "Delaware",
            "Maryland",
            "District of Columbia",
        ],
    ),
    (
        "Upper South",
        &[
            "Virginia",
            "West Virginia",
            "Kentucky",
            "Tennessee",
            "North Carolina",
            "Arkansas",
        ],
    ),
    (
        "Deep South",
        &[
            "South Carolina",
            "Georgia",
            "Florida",
            "Alabama",
            "Mississippi",
            "Louisiana",
        ],
    ),
    (
        "Midwest",
        &[
            "Ohio",
            "Indiana",
            "Illinois",
            "Michigan",
            "Wisconsin",
            "Minnesota",
            "Iowa",
            "Missouri",
            "North Dakota",
            "South Dakota",
            "Nebraska",
            "Kansas",
        ],
    ),
    ("Southwest", &["Texas", "Oklahoma", "New Mexico", "Arizona"]),
    (
        "Mountain West",
        &["Colorado", "Utah", "Nevada", "Wyoming", "Montana", "Idaho"],
    ),
    (
        "Pacific",
        &["Washington", "Oregon", "California", "Alaska", "Hawaii"],
    ),
];

/// Two-letter postal abbreviations plus spellings found in historical records
const STATE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("al", "Alabama"),
    ("ak", "Alaska"),
    ("az", "Arizona"),
    ("ar", "Arkansas"),
    ("ca", "California"),
    ("co", "Colorado"),
    ("ct", "Connecticut"),
    ("de", "Delaware"),
    ("fl", "Florida"),
    ("ga", "Georgia"),
    ("hi", "Hawaii"),
    ("id", "Idaho"),
    ("il", "Illinois"),
    ("in", "Indiana"),
    ("ia", "Iowa"),
    ("ks", "Kansas"),
    ("ky", "Kentucky"),
    ("la", "Louisiana"),
    ("me", "Maine"),
    ("md", "Maryland"),
    ("ma", "Massachusetts"),
    ("mi", "Michigan"),
    ("mn", "Minnesota"),
    ("ms", "Mississippi"),
    ("mo", "Missouri"),
    ("mt", "Montana"),
    ("ne", "Nebraska"),
    ("nv", "Nevada"),
    ("nh", "New Hampshire"),
    ("nj", "New Jersey"),
    ("nm", "New Mexico"),
    ("ny", "New York"),
    ("nc", "North Carolina"),
    ("nd", "North Dakota"),
    ("oh", "Ohio"),
    ("ok", "Oklahoma"),
    ("or", "Oregon"),
    ("pa", "Pennsylvania"),
    ("ri", "Rhode Island"),
    ("sc", "South Carolina"),
    ("sd", "South Dakota"),
    ("tn", "Tennessee"),
    ("tx", "Texas"),
    ("ut", "Utah"),
    ("vt", "Vermont"),
    ("va", "Virginia"),
    ("wa", "Washington"),
    ("wv", "West Virginia"),
    ("wi", "Wisconsin"),
    ("wy", "Wyoming"),
    ("dc", "District of Columbia"),
    // Spellings common in older records
    ("penna", "Pennsylvania"),
    ("penn", "Pennsylvania"),
    ("mass", "Massachusetts"),
    ("mass bay colony", "Massachusetts"),
    ("massachusetts bay colony", "Massachusetts"),
    ("conn", "Connecticut"),
    ("tenn", "Tennessee"),
    ("miss", "Mississippi"),
    ("ala", "Alabama"),
    ("cal", "California"),
    ("calif", "California"),
    ("wash", "Washington"),
    ("w virginia", "West Virginia"),
    ("w va", "West Virginia"),
];

/// Country name variants, canonical name on the right. Historical German,
/// French, Canadian, and Mexican territory names fold into the present-day
/// country so records from different eras land in one bucket.
const COUNTRY_VARIANTS: &[(&str, &str)] = &[
    ("united states", UNITED_STATES),
    ("united states of america", UNITED_STATES),
    ("usa", UNITED_STATES),
    ("us", UNITED_STATES),
    ("america", UNITED_STATES),
    ("united kingdom", "United Kingdom"),
    ("uk", "United Kingdom"),
    ("great britain", "United Kingdom"),
    ("britain", "United Kingdom"),
    ("england", "England"),
    ("scotland", "Scotland"),
    ("wales", "Wales"),
    ("ireland", "Ireland"),
    ("germany", "Germany"),
    ("deutschland", "Germany"),
    ("prussia", "Germany"),
    ("preussen", "Germany"),
    ("palatinate", "Germany"),
    ("pfalz", "Germany"),
    ("rheinpfalz", "Germany"),
    ("bavaria", "Germany"),
    ("bayern", "Germany"),
    ("baden", "Germany"),
    ("wurttemberg", "Germany"),
    ("saxony", "Germany"),
    ("hesse", "Germany"),
    ("hessen", "Germany"),
    ("hanover", "Germany"),
    ("westphalia", "Germany"),
    ("france", "France"),
    ("alsace", "France"),
    ("lorraine", "France"),
    ("normandy", "France"),
    ("brittany", "France"),
    ("canada", "Canada"),
    ("upper canada", "Canada"),
    ("lower canada", "Canada"),
    ("new france", "Canada"),
    ("mexico", "Mexico"),
    ("new spain", "Mexico"),
];

lazy_static! {
    static ref STATE_LOOKUP: FxHashMap<String, &'static str> = {
        let mut map = FxHashMap::default();
        for (_region, states) in STATE_REGIONS {
            for state in *states {
                map.insert(state.to_lowercase(), *state);
            }
        }
        for (abbreviation, state) in STATE_ABBREVIATIONS {
            map.insert((*abbreviation).to_string(), *state);
        }
        map
    };
    static ref REGION_LOOKUP: FxHashMap<&'static str, &'static str> = {
        let mut map = FxHashMap::default();
        for (region, states) in STATE_REGIONS {
            for state in *states {
                map.insert(*state, *region);
            }
        }
        map
    };
    static ref COUNTRY_LOOKUP: FxHashMap<&'static str, &'static str> =
        COUNTRY_VARIANTS.iter().copied().collect();
}

/// Normalize a segment for table lookup: lowercase, periods removed,
/// whitespace collapsed
fn lookup_key(segment: &str) -> String {
    segment
        .to_lowercase()
        .replace('.', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve a segment to a canonical US state name, if it is one
#[must_use]
pub fn lookup_state(segment: &str) -> Option<&'static str> {
    STATE_LOOKUP.get(lookup_key(segment).as_str()).copied()
}

/// Region assignment for a canonical US state name
#[must_use]
pub fn region_for_state(state: &str) -> Option<&'static str> {
    REGION_LOOKUP.get(state).copied()
}

/// Resolve a segment to a canonical country name, if recognized
#[must_use]
pub fn lookup_country(segment: &str) -> Option<&'static str> {
    COUNTRY_LOOKUP.get(lookup_key(segment).as_str()).copied()
}
