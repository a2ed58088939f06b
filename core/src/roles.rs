//! Static role catalog for the Trouble Brewing script.
//!
//! The catalog is fixed at compile time: 22 roles, each tagged with one of
//! four affiliations. Nothing here mutates at runtime; the assignment store
//! layers "who holds what" on top of this list.

use std::fmt;

/// Which side of the grimoire a role sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Affiliation {
    Townsfolk,
    Outsider,
    Minion,
    Demon,
}

impl Affiliation {
    pub const ALL: [Affiliation; 4] = [
        Affiliation::Townsfolk,
        Affiliation::Outsider,
        Affiliation::Minion,
        Affiliation::Demon,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Affiliation::Townsfolk => "Townsfolk",
            Affiliation::Outsider => "Outsider",
            Affiliation::Minion => "Minion",
            Affiliation::Demon => "Demon",
        }
    }

    /// Case-insensitive lookup for user input.
    pub fn parse(input: &str) -> Option<Affiliation> {
        Affiliation::ALL
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(input.trim()))
    }
}

impl fmt::Display for Affiliation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One role from the script, identified by its display title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Washerwoman,
    Librarian,
    Investigator,
    Chef,
    Empath,
    FortuneTeller,
    Undertaker,
    Monk,
    Ravenkeeper,
    Virgin,
    Slayer,
    Soldier,
    Mayor,
    Butler,
    Drunk,
    Recluse,
    Saint,
    Poisoner,
    Spy,
    ScarletWoman,
    Baron,
    Imp,
}

/// Reverse lookup from display title to role.
static TITLES: phf::Map<&'static str, Role> = phf::phf_map! {
    "Washerwoman" => Role::Washerwoman,
    "Librarian" => Role::Librarian,
    "Investigator" => Role::Investigator,
    "Chef" => Role::Chef,
    "Empath" => Role::Empath,
    "Fortune Teller" => Role::FortuneTeller,
    "Undertaker" => Role::Undertaker,
    "Monk" => Role::Monk,
    "Ravenkeeper" => Role::Ravenkeeper,
    "Virgin" => Role::Virgin,
    "Slayer" => Role::Slayer,
    "Soldier" => Role::Soldier,
    "Mayor" => Role::Mayor,
    "Butler" => Role::Butler,
    "Drunk" => Role::Drunk,
    "Recluse" => Role::Recluse,
    "Saint" => Role::Saint,
    "Poisoner" => Role::Poisoner,
    "Spy" => Role::Spy,
    "Scarlet Woman" => Role::ScarletWoman,
    "Baron" => Role::Baron,
    "Imp" => Role::Imp,
};

impl Role {
    /// Every role in catalog order: Townsfolk, then Outsiders, Minions, Demon.
    pub const ALL: [Role; 22] = [
        Role::Washerwoman,
        Role::Librarian,
        Role::Investigator,
        Role::Chef,
        Role::Empath,
        Role::FortuneTeller,
        Role::Undertaker,
        Role::Monk,
        Role::Ravenkeeper,
        Role::Virgin,
        Role::Slayer,
        Role::Soldier,
        Role::Mayor,
        Role::Butler,
        Role::Drunk,
        Role::Recluse,
        Role::Saint,
        Role::Poisoner,
        Role::Spy,
        Role::ScarletWoman,
        Role::Baron,
        Role::Imp,
    ];

    pub const fn title(self) -> &'static str {
        match self {
            Role::Washerwoman => "Washerwoman",
            Role::Librarian => "Librarian",
            Role::Investigator => "Investigator",
            Role::Chef => "Chef",
            Role::Empath => "Empath",
            Role::FortuneTeller => "Fortune Teller",
            Role::Undertaker => "Undertaker",
            Role::Monk => "Monk",
            Role::Ravenkeeper => "Ravenkeeper",
            Role::Virgin => "Virgin",
            Role::Slayer => "Slayer",
            Role::Soldier => "Soldier",
            Role::Mayor => "Mayor",
            Role::Butler => "Butler",
            Role::Drunk => "Drunk",
            Role::Recluse => "Recluse",
            Role::Saint => "Saint",
            Role::Poisoner => "Poisoner",
            Role::Spy => "Spy",
            Role::ScarletWoman => "Scarlet Woman",
            Role::Baron => "Baron",
            Role::Imp => "Imp",
        }
    }

    pub const fn affiliation(self) -> Affiliation {
        match self {
            Role::Washerwoman
            | Role::Librarian
            | Role::Investigator
            | Role::Chef
            | Role::Empath
            | Role::FortuneTeller
            | Role::Undertaker
            | Role::Monk
            | Role::Ravenkeeper
            | Role::Virgin
            | Role::Slayer
            | Role::Soldier
            | Role::Mayor => Affiliation::Townsfolk,
            Role::Butler | Role::Drunk | Role::Recluse | Role::Saint => Affiliation::Outsider,
            Role::Poisoner | Role::Spy | Role::ScarletWoman | Role::Baron => Affiliation::Minion,
            Role::Imp => Affiliation::Demon,
        }
    }

    /// Exact title lookup.
    pub fn from_title(title: &str) -> Option<Role> {
        TITLES.get(title).copied()
    }

    /// Title lookup tolerant of casing, for user input.
    pub fn from_title_ci(title: &str) -> Option<Role> {
        Role::from_title(title)
            .or_else(|| Role::ALL.iter().copied().find(|r| r.title().eq_ignore_ascii_case(title)))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        assert_eq!(Role::ALL.len(), 22);
        let count = |a: Affiliation| Role::ALL.iter().filter(|r| r.affiliation() == a).count();
        assert_eq!(count(Affiliation::Townsfolk), 13);
        assert_eq!(count(Affiliation::Outsider), 4);
        assert_eq!(count(Affiliation::Minion), 4);
        assert_eq!(count(Affiliation::Demon), 1);
    }

    #[test]
    fn test_titles_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_title(role.title()), Some(role));
        }
    }

    #[test]
    fn test_from_title_is_exact() {
        assert_eq!(Role::from_title("fortune teller"), None);
        assert_eq!(Role::from_title("Dragon"), None);
    }

    #[test]
    fn test_from_title_ci_tolerates_case() {
        assert_eq!(Role::from_title_ci("fortune teller"), Some(Role::FortuneTeller));
        assert_eq!(Role::from_title_ci("SCARLET WOMAN"), Some(Role::ScarletWoman));
        assert_eq!(Role::from_title_ci("imp"), Some(Role::Imp));
        assert_eq!(Role::from_title_ci("Dragon"), None);
    }

    #[test]
    fn test_affiliation_parse() {
        assert_eq!(Affiliation::parse("demon"), Some(Affiliation::Demon));
        assert_eq!(Affiliation::parse(" Townsfolk "), Some(Affiliation::Townsfolk));
        assert_eq!(Affiliation::parse("evil"), None);
    }
}
