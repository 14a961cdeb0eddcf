//! User roles and the fixed route table each role is allowed to navigate.
//!
//! The browser persists the selected role as a plain string; [`Role::from_selection`] turns
//! that string back into a role, falling through to [`Role::Team`] for anything it does not
//! recognise. Each role maps onto exactly one [`RouteTable`].

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Embassy,
    Scout,
    Agent,
    FederationAdmin,
    Team,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Admin,
        Role::Embassy,
        Role::Scout,
        Role::Agent,
        Role::FederationAdmin,
        Role::Team,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Embassy => "embassy",
            Role::Scout => "scout",
            Role::Agent => "agent",
            Role::FederationAdmin => "federation_admin",
            Role::Team => "team",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Platform Admin",
            Role::Embassy => "Embassy Officer",
            Role::Scout => "Scout",
            Role::Agent => "Agent",
            Role::FederationAdmin => "Federation Admin",
            Role::Team => "Club Team",
        }
    }

    /// Parses a stored role string, returning `None` when it matches no role.
    ///
    /// Matching ignores case and surrounding whitespace.
    pub fn parse(value: &str) -> Option<Role> {
        let value = value.trim().to_ascii_lowercase();

        Role::ALL.into_iter().find(|role| role.as_str() == value)
    }

    /// Resolves the persisted role selection, defaulting to [`Role::Team`].
    pub fn from_selection(selection: Option<&str>) -> Role {
        selection.and_then(Role::parse).unwrap_or(Role::Team)
    }

    pub fn route_table(&self) -> RouteTable {
        if *self == Role::Admin {
            RouteTable::Admin
        } else if *self == Role::Embassy {
            RouteTable::Embassy
        } else if *self == Role::Scout || *self == Role::Agent {
            RouteTable::Scouting
        } else if *self == Role::FederationAdmin {
            RouteTable::Federation
        } else {
            RouteTable::Team
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTable {
    Admin,
    Embassy,
    Scouting,
    Federation,
    Team,
}

impl RouteTable {
    pub const ALL: [RouteTable; 5] = [
        RouteTable::Admin,
        RouteTable::Embassy,
        RouteTable::Scouting,
        RouteTable::Federation,
        RouteTable::Team,
    ];

    /// Top-level paths reachable under this table, in navigation order.
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            RouteTable::Admin => &[
                "/admin",
                "/admin/audit",
                "/admin/payments",
                "/admin/fees",
                "/players",
            ],
            RouteTable::Embassy => &["/embassy", "/embassy/verifications"],
            RouteTable::Scouting => &["/scouting", "/scouting/inquiries", "/players", "/tokens"],
            RouteTable::Federation => &["/federation", "/federation/letters", "/federation/map"],
            RouteTable::Team => &["/dashboard", "/players", "/videos", "/compliance", "/tokens"],
        }
    }

    /// Landing page after selecting a role.
    pub fn home(&self) -> &'static str {
        self.paths()[0]
    }

    /// Whether `path` belongs to this table.
    ///
    /// Nested pages (`/players/12`) are reachable when their parent path is in the table.
    pub fn allows(&self, path: &str) -> bool {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        self.paths().iter().any(|allowed| {
            path == *allowed
                || path
                    .strip_prefix(*allowed)
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }
}
