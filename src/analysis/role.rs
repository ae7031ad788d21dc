use crate::api::models::Champion;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Tank,
    Fighter,
    Mage,
    Assassin,
    Marksman,
    Support,
}

/// Checked in order: the first tag present wins for multi-tagged champions.
const ROLE_PRIORITY: [(&str, Role); 6] = [
    ("Tank", Role::Tank),
    ("Assassin", Role::Assassin),
    ("Marksman", Role::Marksman),
    ("Mage", Role::Mage),
    ("Support", Role::Support),
    ("Fighter", Role::Fighter),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleWeights {
    pub tankiness: f64,
    pub dps: f64,
    pub mobility: f64,
}

impl RoleWeights {
    pub const fn new(tankiness: f64, dps: f64, mobility: f64) -> Self {
        RoleWeights {
            tankiness,
            dps,
            mobility,
        }
    }

    pub fn sum(&self) -> f64 {
        self.tankiness + self.dps + self.mobility
    }

    pub fn combine(&self, tankiness: f64, dps: f64, mobility: f64) -> f64 {
        tankiness * self.tankiness + dps * self.dps + mobility * self.mobility
    }
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Tank,
        Role::Fighter,
        Role::Mage,
        Role::Assassin,
        Role::Marksman,
        Role::Support,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Tank => "tank",
            Role::Fighter => "fighter",
            Role::Mage => "mage",
            Role::Assassin => "assassin",
            Role::Marksman => "marksman",
            Role::Support => "support",
        }
    }

    /// Blend of tankiness/dps/mobility used for the overall ranking.
    /// Each row must sum to 1.0.
    pub fn weights(&self) -> RoleWeights {
        match self {
            Role::Tank => RoleWeights::new(0.6, 0.2, 0.2),
            Role::Assassin => RoleWeights::new(0.1, 0.5, 0.4),
            Role::Marksman => RoleWeights::new(0.15, 0.7, 0.15),
            Role::Mage => RoleWeights::new(0.2, 0.5, 0.3),
            Role::Support => RoleWeights::new(0.4, 0.2, 0.4),
            Role::Fighter => RoleWeights::new(0.35, 0.4, 0.25),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown role: {}", s))
    }
}

/// Primary role from the champion's tags, `Fighter` when nothing matches.
pub fn role_of(champion: &Champion) -> Role {
    role_from_tags(&champion.tags)
}

pub fn role_from_tags(tags: &[String]) -> Role {
    ROLE_PRIORITY
        .iter()
        .find(|(tag, _)| tags.iter().any(|t| t == tag))
        .map(|(_, role)| *role)
        .unwrap_or(Role::Fighter)
}
