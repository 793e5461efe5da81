//! Template league rosters carrying human-readable team valuations.

use serde::{Deserialize, Serialize};

/// A team name paired with its raw magnitude string (e.g. `"30,3M"`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RosterEntry {
    pub name: String,
    pub value: Option<String>,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            name: name.into(),
            value: value.map(str::to_string),
        }
    }

    /// Raw value when present and non-empty. Entries without one stay on the
    /// roster but are left out of valuation statistics.
    pub fn raw_value(&self) -> Option<&str> {
        self.value.as_deref().filter(|v| !v.is_empty())
    }
}

/// A league as returned by `/templates/{template}/leagues/{name}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LeagueRoster {
    pub name: String,
    pub teams: Vec<RosterEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_roster_entry_raw_value() {
        assert_eq!(RosterEntry::new("A", Some("10M")).raw_value(), Some("10M"));
        assert_eq!(RosterEntry::new("B", Some("")).raw_value(), None);
        assert_eq!(RosterEntry::new("C", None).raw_value(), None);
    }

    #[test]
    fn test_league_roster_deserialization_ignores_extra_fields() {
        let json = json!({
            "name": "LaLiga",
            "type": "League",
            "team_count": 3,
            "teams": [
                { "name": "Real Madrid", "value": "1,2B", "country": "ES" },
                { "name": "Girona", "value": "180M" },
                { "name": "Leganés" }
            ]
        });

        let roster: LeagueRoster = serde_json::from_value(json).unwrap();
        assert_eq!(roster.name, "LaLiga");
        assert_eq!(roster.teams.len(), 3);
        assert_eq!(roster.teams[1].raw_value(), Some("180M"));
        assert_eq!(roster.teams[2].value, None);
    }

    #[test]
    fn test_league_roster_missing_teams() {
        let roster: LeagueRoster = serde_json::from_value(json!({ "name": "Empty" })).unwrap();
        assert!(roster.teams.is_empty());
    }
}
