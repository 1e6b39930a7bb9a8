use std::str::FromStr;

#[derive(Hash, PartialEq, Eq, Copy, Clone, Debug)]
pub enum RouteCategory {
    Hiking,
    Cycling,
}

impl FromStr for RouteCategory {
    type Err = String;

    /// Exact, case-sensitive match on the URL path segment.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hiking" => Ok(RouteCategory::Hiking),
            "cycling" => Ok(RouteCategory::Cycling),
            _ => {
                log::debug!("{s} is not a route category");
                Err(format!("{s} not a route category"))
            }
        }
    }
}

impl RouteCategory {
    /// Upstream layers searched, in order, when looking up a whole route by number.
    pub fn full_route_labels(&self) -> &'static [&'static str] {
        match self {
            RouteCategory::Hiking => &[
                "WanderlandRoutenNational",
                "WanderlandRoutenRegional",
                "WanderlandRoutenLokal",
            ],
            RouteCategory::Cycling => &[
                "VelolandRoutenNational",
                "VelolandRoutenRegional",
                "VelolandRoutenLokal",
            ],
        }
    }

    /// Path label of the route_or_segment endpoint.
    pub fn segment_label(&self) -> &'static str {
        match self {
            RouteCategory::Hiking => "hike",
            RouteCategory::Cycling => "cycle",
        }
    }
}
