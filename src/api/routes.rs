//! HTTP routes the intake forms post to

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiRoute {
    Contact,
    Foster,
    Volunteer,
    ColonySubmit,
    DepositAssistance,
    SurrenderPrevention,
    VetFund,
    LostFound,
    CreateCheckout,
    SponsorInquiry,
}

impl ApiRoute {
    pub const ALL: [ApiRoute; 10] = [
        ApiRoute::Contact,
        ApiRoute::Foster,
        ApiRoute::Volunteer,
        ApiRoute::ColonySubmit,
        ApiRoute::DepositAssistance,
        ApiRoute::SurrenderPrevention,
        ApiRoute::VetFund,
        ApiRoute::LostFound,
        ApiRoute::CreateCheckout,
        ApiRoute::SponsorInquiry,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            ApiRoute::Contact => "/api/contact",
            ApiRoute::Foster => "/api/foster",
            ApiRoute::Volunteer => "/api/volunteer",
            ApiRoute::ColonySubmit => "/api/colonies/submit",
            ApiRoute::DepositAssistance => "/api/help/deposit-assistance",
            ApiRoute::SurrenderPrevention => "/api/help/surrender-prevention",
            ApiRoute::VetFund => "/api/help/vet-fund",
            ApiRoute::LostFound => "/api/lost-found",
            ApiRoute::CreateCheckout => "/api/donations/create-checkout",
            ApiRoute::SponsorInquiry => "/api/sponsors/inquiry",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.path() == path)
    }
}

impl fmt::Display for ApiRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_unique_and_round_trip() {
        for route in ApiRoute::ALL {
            assert_eq!(ApiRoute::from_path(route.path()), Some(route));
        }
        assert_eq!(ApiRoute::from_path("/api/newsletter"), None);
    }

    #[test]
    fn test_display_is_path() {
        assert_eq!(ApiRoute::VetFund.to_string(), "/api/help/vet-fund");
    }
}
