//! Per-chapter city configuration
//!
//! One preset is selected at startup and passed around as `&'static CityConfig`.
//! Nothing mutates it afterwards.

use serde::Serialize;

/// Local animal services listed for a chapter
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalResources {
    pub shelter_name: &'static str,
    pub shelter_url: Option<&'static str>,
    pub tnr_program: Option<&'static str>,
    pub tnr_url: Option<&'static str>,
    pub emergency_vet: Option<&'static str>,
    pub emergency_vet_phone: Option<&'static str>,
}

/// Feature flags deciding which programs a chapter runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    pub donations: bool,
    pub fostering: bool,
    pub colony_map: bool,
    pub food_stations: bool,
    pub lost_and_found: bool,
    pub events: bool,
    pub corporate: bool,
    pub surrender_prevention: bool,
    pub vet_fund: bool,
    pub deposit_assistance: bool,
}

impl Features {
    pub const ALL: Features = Features {
        donations: true,
        fostering: true,
        colony_map: true,
        food_stations: true,
        lost_and_found: true,
        events: true,
        corporate: true,
        surrender_prevention: true,
        vet_fund: true,
        deposit_assistance: true,
    };

    /// (label, enabled) pairs for display
    pub fn entries(&self) -> [(&'static str, bool); 10] {
        [
            ("Donations", self.donations),
            ("Fostering", self.fostering),
            ("Colony map", self.colony_map),
            ("Food stations", self.food_stations),
            ("Lost & found", self.lost_and_found),
            ("Events", self.events),
            ("Corporate", self.corporate),
            ("Surrender prevention", self.surrender_prevention),
            ("Vet fund", self.vet_fund),
            ("Deposit assistance", self.deposit_assistance),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityConfig {
    pub slug: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub state_abbrev: &'static str,
    pub region: &'static str,
    pub tagline: &'static str,
    pub org_name: &'static str,
    pub org_name_short: &'static str,
    pub email: &'static str,
    pub phone: Option<&'static str>,
    pub zip: &'static str,
    pub site_url: &'static str,
    /// (latitude, longitude)
    pub map_center: (f64, f64),
    pub map_zoom: u8,
    pub resources: LocalResources,
    pub primary_color: &'static str,
    pub features: Features,
}

pub const DEFAULT_CITY_SLUG: &str = "austin";

pub static AUSTIN: CityConfig = CityConfig {
    slug: "austin",
    city: "Austin",
    state: "Texas",
    state_abbrev: "TX",
    region: "Central Texas",
    tagline: "Helping Austin's community cats thrive",
    org_name: "Paws N Claws ATX",
    org_name_short: "PawsNClaws ATX",
    email: "hello@pawsandclawsatx.com",
    phone: None,
    zip: "78701",
    site_url: "https://pawsnclaws.org",
    map_center: (30.2672, -97.7431),
    map_zoom: 12,
    resources: LocalResources {
        shelter_name: "Austin Animal Center",
        shelter_url: Some("https://www.austintexas.gov/austin-animal-center"),
        tnr_program: Some("Austin Animal Center Community Cats"),
        tnr_url: Some("https://www.austintexas.gov/page/community-cats"),
        emergency_vet: Some("Austin Vet Emergency"),
        emergency_vet_phone: Some("512-343-8838"),
    },
    primary_color: "amber",
    features: Features::ALL,
};

pub static CHARLOTTE: CityConfig = CityConfig {
    slug: "charlotte",
    city: "Charlotte",
    state: "North Carolina",
    state_abbrev: "NC",
    region: "Piedmont",
    tagline: "Helping Charlotte's community cats thrive",
    org_name: "Paws N Claws Charlotte",
    org_name_short: "PawsNClaws CLT",
    email: "charlotte@pawsandclawsatx.com",
    phone: None,
    zip: "28202",
    site_url: "https://pawsnclaws.org/cities/charlotte",
    map_center: (35.2271, -80.8431),
    map_zoom: 11,
    resources: LocalResources {
        shelter_name: "Charlotte-Mecklenburg Animal Care & Control",
        shelter_url: Some("https://www.charlottenc.gov/Animal-Care-and-Control"),
        tnr_program: Some("Humane Society of Charlotte TNR"),
        tnr_url: Some(
            "https://humanesocietyofcharlotte.org/health-wellness/trap-neuter-return/",
        ),
        emergency_vet: Some("CARE Charlotte"),
        emergency_vet_phone: Some("704-457-2300"),
    },
    primary_color: "teal",
    features: Features {
        donations: true,
        fostering: false,
        colony_map: true,
        food_stations: false,
        lost_and_found: false,
        events: false,
        corporate: false,
        surrender_prevention: true,
        vet_fund: true,
        deposit_assistance: true,
    },
};

pub static DENVER: CityConfig = CityConfig {
    slug: "denver",
    city: "Denver",
    state: "Colorado",
    state_abbrev: "CO",
    region: "Front Range",
    tagline: "Helping Denver's community cats thrive",
    org_name: "Paws N Claws Denver",
    org_name_short: "PawsNClaws DEN",
    email: "hello@pawsnclawsdenver.org",
    phone: None,
    zip: "80202",
    site_url: "https://pawsnclawsdenver.org",
    map_center: (39.7392, -104.9903),
    map_zoom: 12,
    resources: LocalResources {
        shelter_name: "Denver Animal Shelter",
        shelter_url: None,
        tnr_program: Some("Denver Dumb Friends League"),
        tnr_url: Some("https://www.ddfl.org/"),
        emergency_vet: Some("Alameda East Veterinary Hospital"),
        emergency_vet_phone: Some("303-366-2639"),
    },
    primary_color: "blue",
    features: Features::ALL,
};

pub static PHOENIX: CityConfig = CityConfig {
    slug: "phoenix",
    city: "Phoenix",
    state: "Arizona",
    state_abbrev: "AZ",
    region: "Valley of the Sun",
    tagline: "Protecting Phoenix's desert cats",
    org_name: "Paws N Claws Phoenix",
    org_name_short: "PawsNClaws PHX",
    email: "hello@pawsnclawsphx.org",
    phone: None,
    zip: "85001",
    site_url: "https://pawsnclawsphx.org",
    map_center: (33.4484, -112.0740),
    map_zoom: 11,
    resources: LocalResources {
        shelter_name: "Maricopa County Animal Care & Control",
        shelter_url: Some("https://www.maricopa.gov/5614/Animal-Care-Control"),
        tnr_program: Some("ADLA - Altered Tails"),
        tnr_url: Some("https://www.alteredtails.org/"),
        emergency_vet: Some("Emergency Animal Clinic"),
        emergency_vet_phone: Some("602-995-3757"),
    },
    primary_color: "orange",
    features: Features::ALL,
};

pub static PORTLAND: CityConfig = CityConfig {
    slug: "portland",
    city: "Portland",
    state: "Oregon",
    state_abbrev: "OR",
    region: "Pacific Northwest",
    tagline: "Caring for Portland's community cats, rain or shine",
    org_name: "Paws N Claws PDX",
    org_name_short: "PawsNClaws PDX",
    email: "hello@pawsnclawspdx.org",
    phone: None,
    zip: "97201",
    site_url: "https://pawsnclawspdx.org",
    map_center: (45.5152, -122.6784),
    map_zoom: 12,
    resources: LocalResources {
        shelter_name: "Oregon Humane Society",
        shelter_url: Some("https://www.oregonhumane.org/"),
        tnr_program: Some("Feral Cat Coalition of Oregon"),
        tnr_url: Some("https://www.feralcats.com/"),
        emergency_vet: Some("DoveLewis Emergency Animal Hospital"),
        emergency_vet_phone: Some("503-228-7281"),
    },
    primary_color: "emerald",
    features: Features::ALL,
};

static ALL_CITIES: [&CityConfig; 5] = [&AUSTIN, &CHARLOTTE, &DENVER, &PHOENIX, &PORTLAND];

impl CityConfig {
    pub fn all() -> &'static [&'static CityConfig] {
        &ALL_CITIES
    }

    /// Look up a preset by slug, case-insensitively
    pub fn by_slug(slug: &str) -> Option<&'static CityConfig> {
        let slug = slug.trim();
        ALL_CITIES
            .iter()
            .copied()
            .find(|c| c.slug.eq_ignore_ascii_case(slug))
    }

    /// Look up a preset, falling back to the default chapter
    pub fn resolve(slug: Option<&str>) -> &'static CityConfig {
        match slug.and_then(Self::by_slug) {
            Some(city) => city,
            None => {
                if let Some(slug) = slug {
                    tracing::debug!(slug, "Unknown city, using default");
                }
                default_city()
            }
        }
    }

    /// "Austin, TX"
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.state_abbrev)
    }

    /// Absolute link to a page on the chapter site
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.site_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

pub fn default_city() -> &'static CityConfig {
    &AUSTIN
}
