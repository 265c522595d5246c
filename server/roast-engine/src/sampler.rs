//! Random sampling over the candidate roast list.

use rand::seq::SliceRandom;
use rand::Rng;

/// Upper bound on roasts returned per request.
pub const MAX_ROASTS: usize = 5;

/// Uniformly shuffle the candidates and keep at most `max`.
pub fn sample<R: Rng>(mut candidates: Vec<String>, max: usize, rng: &mut R) -> Vec<String> {
  candidates.shuffle(rng);
  candidates.truncate(max);
  candidates
}
