use maud::{html, Markup};

use crate::templates::layouts::{base, PageConfig};

pub struct ApiRoute {
    pub path: &'static str,
    pub description: &'static str,
}

/// Every JSON route, in the order the landing page lists them
pub const API_ROUTES: &[ApiRoute] = &[
    ApiRoute {
        path: "/api/v1.0/precipitation",
        description: "Date and precipitation for the latest year of data, all stations",
    },
    ApiRoute {
        path: "/api/v1.0/stations",
        description: "Unique station identifiers",
    },
    ApiRoute {
        path: "/api/v1.0/tobs",
        description: "Latest year of dates and temperatures for the most active station",
    },
    ApiRoute {
        path: "/api/v1.0/{start}",
        description: "Min, avg and max temperature from start to the latest date",
    },
    ApiRoute {
        path: "/api/v1.0/{start}/{end}",
        description: "Min, avg and max temperature for a custom date range",
    },
];

pub fn home_page(api_base: &str) -> Markup {
    let config = PageConfig {
        title: "SurfsUp Climate API",
        api_base,
    };

    base(&config, content())
}

fn content() -> Markup {
    html! {
        div class="content" {
            h2 class="subtitle" { "Available Routes" }
            table class="table is-fullwidth is-striped" {
                thead {
                    tr {
                        th { "Route" }
                        th { "Returns" }
                    }
                }
                tbody {
                    @for route in API_ROUTES {
                        tr {
                            td { code { (route.path) } }
                            td { (route.description) }
                        }
                    }
                }
            }
            p {
                "Replace " code { "{start}" } " and " code { "{end}" }
                " with dates in " code { "YYYY-MM-DD" } " format, zero padded."
            }
        }
    }
}
