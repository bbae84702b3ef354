//! Elite archive: a block of pool slots holding good solutions.

use std::ops::Range;

use rand::Rng;

use crate::domain::TourDomain;
use crate::error::Result;
use crate::heuristics::random_index;

/// A contiguous block of pool slots used as crossover partners.
///
/// Membership only changes by overwriting the worst member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EliteArchive {
    first_slot: usize,
    size: usize,
}

impl EliteArchive {
    /// Archive over slots `first_slot..first_slot + size`.
    pub fn new(first_slot: usize, size: usize) -> Self {
        Self { first_slot, size }
    }

    /// Number of members.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Pool slots of the members.
    pub fn slots(&self) -> Range<usize> {
        self.first_slot..self.first_slot + self.size
    }

    /// Copies `source` into every member slot.
    pub fn fill(&self, domain: &mut TourDomain, source: usize) -> Result<()> {
        for slot in self.slots() {
            domain.copy_solution(source, slot)?;
        }
        Ok(())
    }

    /// Slot of the costliest member; ties go to the highest slot.
    pub fn worst_slot(&self, domain: &TourDomain) -> Result<usize> {
        let mut worst = self.first_slot;
        let mut worst_cost = domain.cost(worst)?;
        for slot in self.slots().skip(1) {
            let cost = domain.cost(slot)?;
            if cost >= worst_cost {
                worst = slot;
                worst_cost = cost;
            }
        }
        Ok(worst)
    }

    /// Overwrites the worst member with `source` and returns its slot.
    pub fn replace_worst(&self, domain: &mut TourDomain, source: usize) -> Result<usize> {
        let worst = self.worst_slot(domain)?;
        domain.copy_solution(source, worst)?;
        Ok(worst)
    }

    /// A uniformly random member slot.
    pub fn random_member<R: Rng>(&self, rng: &mut R) -> usize {
        self.first_slot + random_index(rng, self.size)
    }

    /// Highest member cost.
    pub fn max_cost(&self, domain: &TourDomain) -> Result<i64> {
        self.slots().try_fold(i64::MIN, |max, slot| Ok(max.max(domain.cost(slot)?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::InitialisationMode;
    use crate::domain::DomainConfig;
    use crate::test_support::scattered;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup() -> TourDomain {
        let mut domain =
            TourDomain::new(scattered(), DomainConfig::default().with_seed(7)).expect("valid");
        domain.set_pool_size(6);
        domain
    }

    #[test]
    fn test_ties_go_to_highest_slot() {
        let mut domain = setup();
        domain.initialise_solution(0).expect("valid");
        let elite = EliteArchive::new(2, 4);
        elite.fill(&mut domain, 0).expect("valid");
        assert_eq!(elite.worst_slot(&domain).expect("valid"), 5);
    }

    #[test]
    fn test_replace_worst() {
        let mut domain = setup();
        domain.initialise_solution(0).expect("valid");
        domain
            .initialise_solution_with(1, InitialisationMode::Random)
            .expect("valid");
        let elite = EliteArchive::new(2, 4);
        elite.fill(&mut domain, 0).expect("valid");
        domain.copy_solution(1, 3).expect("valid");

        let worse = domain.cost(1).expect("valid") > domain.cost(0).expect("valid");
        let worst = elite.worst_slot(&domain).expect("valid");
        assert_eq!(worst, if worse { 3 } else { 5 });

        let before = elite.max_cost(&domain).expect("valid");
        let replaced = elite.replace_worst(&mut domain, 0).expect("valid");
        assert_eq!(replaced, worst);
        assert!(elite.max_cost(&domain).expect("valid") <= before);
    }

    #[test]
    fn test_random_member_in_range() {
        let elite = EliteArchive::new(3, 5);
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            assert!(elite.slots().contains(&elite.random_member(&mut rng)));
        }
    }
}
