use dioxus::prelude::*;

use crate::client::{
    components::{Navbar, RoleGate},
    routes::{
        admin::{AdminOverview, AuditLogs, FederationPayments, FeeSchedules},
        embassy::{EmbassyLookup, Verifications},
        federation::{FederationOverview, Letters, NationalityMap},
        scouting::{Inquiries, InquiryThread, ScoutingOverview},
        team::{Compliance, Dashboard, PlayerDetail, Players, Tokens, Videos},
        Home, NotFound,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

        #[layout(RoleGate)]

        #[route("/dashboard")]
        Dashboard {},
        #[route("/players")]
        Players {},
        #[route("/players/:id")]
        PlayerDetail { id: i32 },
        #[route("/videos")]
        Videos {},
        #[route("/compliance")]
        Compliance {},
        #[route("/tokens")]
        Tokens {},

        #[route("/admin")]
        AdminOverview {},
        #[route("/admin/audit")]
        AuditLogs {},
        #[route("/admin/payments")]
        FederationPayments {},
        #[route("/admin/fees")]
        FeeSchedules {},

        #[route("/embassy")]
        EmbassyLookup {},
        #[route("/embassy/verifications")]
        Verifications {},

        #[route("/scouting")]
        ScoutingOverview {},
        #[route("/scouting/inquiries")]
        Inquiries {},
        #[route("/scouting/inquiries/:id")]
        InquiryThread { id: i32 },

        #[route("/federation")]
        FederationOverview {},
        #[route("/federation/letters")]
        Letters {},
        #[route("/federation/map")]
        NationalityMap {},

        #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Route;
    use crate::model::role::{Role, RouteTable};

    /// Every path a role can navigate to resolves to a page rather than the not-found view
    #[test]
    fn every_table_path_has_a_page() {
        for table in RouteTable::ALL {
            for path in table.paths() {
                let route = Route::from_str(path).unwrap();

                assert!(
                    !matches!(route, Route::NotFound { .. }),
                    "{path} has no page"
                );
                assert_eq!(route.to_string(), *path);
            }
        }
    }

    /// Every gated page belongs to at least one role's table
    #[test]
    fn every_gated_page_is_reachable() {
        let gated = [
            Route::Dashboard {},
            Route::Players {},
            Route::PlayerDetail { id: 3 },
            Route::Videos {},
            Route::Compliance {},
            Route::Tokens {},
            Route::AdminOverview {},
            Route::AuditLogs {},
            Route::FederationPayments {},
            Route::FeeSchedules {},
            Route::EmbassyLookup {},
            Route::Verifications {},
            Route::ScoutingOverview {},
            Route::Inquiries {},
            Route::InquiryThread { id: 3 },
            Route::FederationOverview {},
            Route::Letters {},
            Route::NationalityMap {},
        ];

        for route in gated {
            let path = route.to_string();

            assert!(
                Role::ALL
                    .iter()
                    .any(|role| role.route_table().allows(&path)),
                "{path} is unreachable"
            );
        }
    }
}
