//! Default nickname generation
//!
//! Callers that omit a nickname at registration or creation get one
//! generated here. The randomness source is injected so schema validation
//! stays deterministic under test.

use rand::Rng;
use rand::seq::SliceRandom;

const ADJECTIVES: &[&str] = &[
    "brisk", "calm", "clever", "daring", "eager", "gentle", "jolly", "keen", "lively", "merry",
    "nimble", "proud", "quick", "silent", "witty",
];

const ANIMALS: &[&str] = &[
    "badger", "falcon", "heron", "lynx", "marmot", "otter", "panda", "raven", "swift", "wolf",
];

/// Generate a human-readable default nickname.
///
/// The output always satisfies the nickname validator: word characters
/// and hyphens only, at least 3 characters.
pub fn generate_nickname(rng: &mut impl Rng) -> String {
    let adjective = ADJECTIVES
        .choose(rng)
        .expect("adjective list is non-empty");
    let animal = ANIMALS.choose(rng).expect("animal list is non-empty");
    let number: u16 = rng.gen_range(0..1000);

    format!("{}_{}_{}", adjective, animal, number)
}
