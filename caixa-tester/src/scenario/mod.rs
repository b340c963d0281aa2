use anyhow::Result;

pub mod catalog;
pub mod policy;
pub mod random_walk;
pub mod smoke;

/// One iteration of a scenario, driven by a per-iteration seed.
pub type ScenarioCheck = fn(u64) -> Result<()>;

#[derive(Debug, Clone, Copy)]
pub struct TestScenario {
    pub name: &'static str,
    pub description: &'static str,
    pub check: ScenarioCheck,
}

impl TestScenario {
    #[must_use]
    pub const fn new(name: &'static str, description: &'static str, check: ScenarioCheck) -> Self {
        Self {
            name,
            description,
            check,
        }
    }

    /// Run one iteration.
    ///
    /// # Errors
    ///
    /// Returns the first expectation the session broke.
    pub fn run(&self, seed: u64) -> Result<()> {
        (self.check)(seed)
    }
}

const SCENARIOS: &[TestScenario] = &[
    TestScenario::new(
        "smoke",
        "Add, adjust, discount and finalize one sale",
        smoke::run,
    ),
    TestScenario::new(
        "empty-cart-save",
        "Finalizing an empty cart is refused",
        policy::empty_cart_save,
    ),
    TestScenario::new(
        "quantity-policy",
        "Zero quantities drop lines; finalize rejects non-positive lines",
        policy::quantity_policy,
    ),
    TestScenario::new(
        "catalog-toggle",
        "Tab switching and search narrow the visible catalog",
        catalog::run,
    ),
    TestScenario::new(
        "payment-fallback",
        "An empty payment directory falls back to Pix",
        policy::payment_fallback,
    ),
    TestScenario::new(
        "random-walk",
        "Seeded random intents keep every cart figure consistent",
        random_walk::run,
    ),
];

#[must_use]
pub fn get_scenario(name: &str) -> Option<&'static TestScenario> {
    SCENARIOS.iter().find(|s| s.name == name)
}

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.name, s.description)).collect()
}

#[must_use]
pub fn all_scenario_names() -> Vec<String> {
    SCENARIOS.iter().map(|s| s.name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scenario_passes_for_a_few_seeds() {
        for scenario in SCENARIOS {
            for seed in [1, 1337, u64::MAX] {
                scenario
                    .run(seed)
                    .unwrap_or_else(|e| panic!("{} failed for seed {seed}: {e:#}", scenario.name));
            }
        }
    }

    #[test]
    fn scenario_names_are_unique_and_listed() {
        let names = all_scenario_names();
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
        assert_eq!(list_scenarios().len(), names.len());
        assert!(get_scenario("smoke").is_some());
        assert!(get_scenario("nope").is_none());
    }
}
