use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::de::IntoDeserializer;
use serde::de::value::{Error as ValueError, StrDeserializer};

/// Where the browser goes after a successful sign-in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    Dashboard,
    AdminDashboard,
}

impl Destination {
    pub fn href(&self) -> &'static str {
        match self {
            Destination::Dashboard => "dashboard.html",
            Destination::AdminDashboard => "admin-dashboard.html",
        }
    }
}

/// Variant names double as the persisted `userRole` values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum Role {
    Resident,
    #[serde(rename = "Facility Staff")]
    FacilityStaff,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Resident, Role::FacilityStaff, Role::Admin];

    /// Display name; also the value persisted under `userRole`.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Resident => "Resident",
            Role::FacilityStaff => "Facility Staff",
            Role::Admin => "Admin",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            Role::Resident => "Book courts, join leagues and keep track of your games.",
            Role::FacilityStaff => "Manage schedules, check-ins and facility upkeep.",
            Role::Admin => "Oversee facilities, staff accounts and hub settings.",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Role::Resident => "🏃",
            Role::FacilityStaff => "🏟️",
            Role::Admin => "🛡️",
        }
    }

    pub fn destination(&self) -> Destination {
        match self {
            Role::Admin => Destination::AdminDashboard,
            Role::Resident | Role::FacilityStaff => Destination::Dashboard,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role `{0}`")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let de: StrDeserializer<'_, ValueError> = s.into_deserializer();
        Role::deserialize(de).map_err(|_| UnknownRole(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for role in Role::ALL {
            assert_eq!(role.label().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn facility_staff_is_stored_with_a_space() {
        assert_eq!("Facility Staff".parse::<Role>(), Ok(Role::FacilityStaff));
        assert_eq!(Role::FacilityStaff.label(), "Facility Staff");
    }

    #[test]
    fn parse_is_exact() {
        assert!("admin".parse::<Role>().is_err());
        assert!("FacilityStaff".parse::<Role>().is_err());
        assert_eq!(
            "Coach".parse::<Role>(),
            Err(UnknownRole("Coach".to_owned()))
        );
    }

    #[test]
    fn only_admin_lands_on_admin_dashboard() {
        assert_eq!(Role::Admin.destination(), Destination::AdminDashboard);
        assert_eq!(Role::Resident.destination(), Destination::Dashboard);
        assert_eq!(Role::FacilityStaff.destination(), Destination::Dashboard);
        assert_ne!(
            Destination::AdminDashboard.href(),
            Destination::Dashboard.href()
        );
    }
}
