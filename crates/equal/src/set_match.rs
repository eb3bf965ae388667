//! The unordered-collection matcher.

use dynval::Value;

use crate::cache::VisitCache;
use crate::engine::Engine;
use crate::error::EqualError;

/// Searches for a bijection between set members that survived the direct
/// membership filter. Greedy: each target takes the first source candidate
/// it equals and that candidate is consumed; a committed pairing is never
/// revisited. A target with no remaining candidate fails the whole
/// comparison. The lack of backtracking can reject adversarial inputs where
/// only another assignment would complete the bijection; that trade-off is
/// deliberate.
pub(crate) fn match_unordered(
    engine: &Engine,
    targets: &[&Value],
    mut candidates: Vec<&Value>,
    cache: &mut VisitCache,
) -> Result<bool, EqualError> {
    'targets: for target in targets.iter().rev() {
        for index in (0..candidates.len()).rev() {
            if engine.eval(target, candidates[index], cache)? {
                candidates.remove(index);
                continue 'targets;
            }
        }
        return Ok(false);
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use dynval::SetVal;

    fn nested(values: [i32; 2]) -> Value {
        Value::Set(SetVal::from_values(values))
    }

    #[test]
    fn permuted_members_match() {
        let engine = Engine::new(Options::default());
        let mut cache = VisitCache::new();
        let a = [nested([1, 2]), nested([3, 4])];
        let b = [nested([3, 4]), nested([1, 2])];
        let targets: Vec<&Value> = a.iter().collect();
        let candidates: Vec<&Value> = b.iter().collect();
        assert!(match_unordered(&engine, &targets, candidates, &mut cache).unwrap());
    }

    #[test]
    fn consumed_candidates_are_not_reused() {
        let engine = Engine::new(Options::default());
        let mut cache = VisitCache::new();
        // Two equal targets cannot both claim the single matching candidate.
        let a = [nested([1, 2]), nested([1, 2])];
        let b = [nested([1, 2]), nested([5, 6])];
        let targets: Vec<&Value> = a.iter().collect();
        let candidates: Vec<&Value> = b.iter().collect();
        assert!(!match_unordered(&engine, &targets, candidates, &mut cache).unwrap());
    }

    #[test]
    fn unmatched_target_fails_fast() {
        let engine = Engine::new(Options::default());
        let mut cache = VisitCache::new();
        let a = [nested([1, 2])];
        let b = [nested([9, 9])];
        let targets: Vec<&Value> = a.iter().collect();
        let candidates: Vec<&Value> = b.iter().collect();
        assert!(!match_unordered(&engine, &targets, candidates, &mut cache).unwrap());
    }
}
