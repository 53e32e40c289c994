use crate::components::treat::Treat;
use crate::data::treat_tables::{TableError, TreatTables};
use crate::rules::roll::Roller;

/// Builds random treats from a fixed set of tables.
#[derive(Debug, Clone)]
pub struct TreatGenerator {
    tables: TreatTables,
    max_quantity: u32,
}

impl TreatGenerator {
    pub fn new(tables: TreatTables, max_quantity: u32) -> Result<Self, TableError> {
        tables.validate()?;
        if max_quantity == 0 {
            return Err(TableError::Validation(
                "max treat quantity must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            tables,
            max_quantity,
        })
    }

    /// Draws quantity, size, condition and name, in that order.
    pub fn generate(&self, roller: &mut dyn Roller) -> Treat {
        let quantity = roller.roll_below(self.max_quantity) + 1;
        let size = pick(&self.tables.sizes, roller);
        let condition = pick(&self.tables.conditions, roller);
        let name = pick(&self.tables.names, roller);
        Treat::new(quantity, size, condition, name)
    }
}

fn pick<'a>(list: &'a [String], roller: &mut dyn Roller) -> &'a str {
    let bound = u32::try_from(list.len()).unwrap_or(u32::MAX);
    let idx = roller.roll_below(bound) as usize;
    list.get(idx).map(String::as_str).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::roll::{RngRoller, ScriptedRoller};

    fn small_tables() -> TreatTables {
        TreatTables {
            sizes: vec!["fun".into(), "family".into()],
            conditions: vec!["fresh".into(), "moldy".into(), "golden".into()],
            names: vec!["Nerds".into(), "Apples".into()],
        }
    }

    #[test]
    fn scripted_draws_pick_expected_entries() {
        let generator = TreatGenerator::new(small_tables(), 20).unwrap();
        let mut roller = ScriptedRoller::new(vec![4, 1, 2, 0]);
        let treat = generator.generate(&mut roller);
        assert_eq!(treat, Treat::new(5, "family", "golden", "Nerds"));
    }

    #[test]
    fn quantity_spans_one_to_max() {
        let generator = TreatGenerator::new(small_tables(), 3).unwrap();
        let mut low = ScriptedRoller::new(vec![0]);
        let mut high = ScriptedRoller::new(vec![2]);
        assert_eq!(generator.generate(&mut low).quantity, 1);
        assert_eq!(generator.generate(&mut high).quantity, 3);
    }

    #[test]
    fn random_treats_come_from_tables() {
        let tables = small_tables();
        let generator = TreatGenerator::new(tables.clone(), 20).unwrap();
        let mut roller = RngRoller::seeded(99);
        for _ in 0..200 {
            let treat = generator.generate(&mut roller);
            assert!((1..=20).contains(&treat.quantity));
            assert!(tables.sizes.contains(&treat.size));
            assert!(tables.conditions.contains(&treat.condition));
            assert!(tables.names.contains(&treat.name));
        }
    }

    #[test]
    fn rejects_zero_quantity() {
        assert!(TreatGenerator::new(small_tables(), 0).is_err());
    }
}
