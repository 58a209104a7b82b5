use super::Cell;

/// Trait for cellular automaton rules.
/// A rule only sees the current cell and its live Moore-neighbor count.
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description, B/S notation
    fn description(&self) -> &'static str;

    /// Apply rule to compute next cell state
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell;
}

/// A Life-like rule described by birth/survival neighbor sets.
/// Bit `n` of `birth` set means a dead cell with `n` live neighbors is born;
/// bit `n` of `survival` set means a live cell with `n` neighbors survives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LifeLikeRule {
    name: &'static str,
    description: &'static str,
    birth: u16,
    survival: u16,
}

const fn mask(counts: &[u8]) -> u16 {
    let mut bits = 0u16;
    let mut i = 0;
    while i < counts.len() {
        bits |= 1 << counts[i];
        i += 1;
    }
    bits
}

impl LifeLikeRule {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        birth: &[u8],
        survival: &[u8],
    ) -> Self {
        Self { name, description, birth: mask(birth), survival: mask(survival) }
    }

    /// Conway's Game of Life (B3/S23)
    pub const fn conway() -> Self {
        Self::new("Conway", "B3/S23 - Classic", &[3], &[2, 3])
    }

    /// HighLife (B36/S23), known for its replicator
    pub const fn highlife() -> Self {
        Self::new("HighLife", "B36/S23 - Replicators", &[3, 6], &[2, 3])
    }

    /// Seeds (B2/S), every live cell dies each generation
    pub const fn seeds() -> Self {
        Self::new("Seeds", "B2/S - Exploding", &[2], &[])
    }

    /// Day & Night (B3678/S34678), symmetric under inversion
    pub const fn day_and_night() -> Self {
        Self::new("Day&Night", "B3678/S34678", &[3, 6, 7, 8], &[3, 4, 6, 7, 8])
    }
}

impl Rule for LifeLikeRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        let set = match current {
            Cell::Alive => self.survival,
            Cell::Dead => self.birth,
        };
        Cell::from_bool(neighbors <= 8 && set & (1 << neighbors) != 0)
    }
}

/// Get all available rules
pub fn all_rules() -> Vec<LifeLikeRule> {
    vec![
        LifeLikeRule::conway(),
        LifeLikeRule::highlife(),
        LifeLikeRule::seeds(),
        LifeLikeRule::day_and_night(),
    ]
}

/// Look a rule up by name, ignoring case and punctuation ("day-and-night" works)
pub fn rule_by_name(name: &str) -> Option<LifeLikeRule> {
    let wanted = normalize(name);
    all_rules().into_iter().find(|rule| normalize(rule.name()) == wanted)
}

fn normalize(name: &str) -> String {
    let key: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    match key.as_str() {
        "dayandnight" => "daynight".to_string(),
        _ => key,
    }
}

/// Get default rule (Conway's Life)
pub fn default_rule() -> Box<dyn Rule> {
    Box::new(LifeLikeRule::conway())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conway_rules() {
        let rule = LifeLikeRule::conway();

        // Underpopulation
        assert_eq!(rule.evolve(Cell::Alive, 0), Cell::Dead);
        assert_eq!(rule.evolve(Cell::Alive, 1), Cell::Dead);

        // Survival
        assert_eq!(rule.evolve(Cell::Alive, 2), Cell::Alive);
        assert_eq!(rule.evolve(Cell::Alive, 3), Cell::Alive);

        // Overpopulation
        assert_eq!(rule.evolve(Cell::Alive, 4), Cell::Dead);
        assert_eq!(rule.evolve(Cell::Alive, 8), Cell::Dead);

        // Reproduction
        assert_eq!(rule.evolve(Cell::Dead, 3), Cell::Alive);
        assert_eq!(rule.evolve(Cell::Dead, 2), Cell::Dead);
        assert_eq!(rule.evolve(Cell::Dead, 4), Cell::Dead);
    }

    #[test]
    fn test_highlife_reproduction() {
        let rule = LifeLikeRule::highlife();
        assert_eq!(rule.evolve(Cell::Dead, 6), Cell::Alive);
        assert_eq!(rule.evolve(Cell::Dead, 3), Cell::Alive);
        assert_eq!(rule.evolve(Cell::Alive, 6), Cell::Dead);
    }

    #[test]
    fn test_seeds_always_dies() {
        let rule = LifeLikeRule::seeds();
        for n in 0..=8 {
            assert_eq!(rule.evolve(Cell::Alive, n), Cell::Dead);
        }
        assert_eq!(rule.evolve(Cell::Dead, 2), Cell::Alive);
        assert_eq!(rule.evolve(Cell::Dead, 3), Cell::Dead);
    }

    #[test]
    fn test_rule_lookup() {
        assert_eq!(rule_by_name("conway"), Some(LifeLikeRule::conway()));
        assert_eq!(rule_by_name("HIGHLIFE"), Some(LifeLikeRule::highlife()));
        assert_eq!(rule_by_name("day-and-night"), Some(LifeLikeRule::day_and_night()));
        assert_eq!(rule_by_name("Day&Night"), Some(LifeLikeRule::day_and_night()));
        assert_eq!(rule_by_name("Day and Night"), Some(LifeLikeRule::day_and_night()));
        assert_eq!(rule_by_name("brians-brain"), None);
        // "and" is only an alias inside day-and-night
        assert_eq!(rule_by_name("cANDonway"), None);
        assert_eq!(rule_by_name("highlifeand"), None);
    }

    #[test]
    fn test_default_is_conway() {
        assert_eq!(default_rule().name(), "Conway");
        assert!(default_rule().description().starts_with("B3/S23"));
    }

    #[test]
    fn test_descriptions_carry_notation() {
        for rule in all_rules() {
            assert!(rule.description().starts_with('B'), "{}", rule.name());
            assert!(rule.description().contains("/S"), "{}", rule.name());
        }
    }
}
