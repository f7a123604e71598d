use std::collections::HashSet;

use anyhow::{bail, Result};
use rand::Rng;

const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxyz";
const VOWELS: &[u8] = b"aeiou";

pub const MIN_NAME_LEN: usize = 4;
pub const MAX_NAME_LEN: usize = 8;

/// Candidates tried for a single token before giving up.
pub const MAX_NAME_ATTEMPTS: usize = 10_000;

/// Number of distinct names across every allowed length.
pub const NAME_SPACE: usize = name_space();

const PRESIZE_LIMIT: usize = 4096;

const fn name_space() -> usize {
    let mut total = 0;
    let mut len = MIN_NAME_LEN;
    while len <= MAX_NAME_LEN {
        let mut n = 1;
        let mut i = 0;
        while i < len {
            n *= if i % 2 == 0 { CONSONANTS.len() } else { VOWELS.len() };
            i += 1;
        }
        total += n;
        len += 1;
    }
    total
}

fn random_name<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    let mut name = String::with_capacity(len);
    for i in 0..len {
        let pool = if i % 2 == 0 { CONSONANTS } else { VOWELS };
        let c = pool[rng.random_range(0..pool.len())] as char;
        if i == 0 {
            name.push(c.to_ascii_uppercase());
        } else {
            name.push(c);
        }
    }
    name
}

// Length is drawn per candidate: once every short name is taken, retries move on to longer ones.
fn unique_name<R: Rng + ?Sized>(rng: &mut R, issued: &mut HashSet<String>) -> Result<String> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let len = rng.random_range(MIN_NAME_LEN..=MAX_NAME_LEN);
        let candidate = random_name(rng, len);
        if issued.insert(candidate.clone()) {
            return Ok(candidate);
        }
    }
    bail!(
        "could not find a unique name after {MAX_NAME_ATTEMPTS} attempts ({} of {NAME_SPACE} names issued)",
        issued.len()
    )
}

/// Generate `count` (first, last) pairs with no repeated token across all pairs.
pub fn generate_names<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Result<Vec<(String, String)>> {
    if count > NAME_SPACE / 2 {
        bail!("cannot generate {count} name pairs: only {NAME_SPACE} distinct names exist");
    }
    let mut issued = HashSet::with_capacity(count.saturating_mul(2).min(PRESIZE_LIMIT));
    let mut pairs = Vec::with_capacity(count.min(PRESIZE_LIMIT));
    for _ in 0..count {
        let first = unique_name(rng, &mut issued)?;
        let last = unique_name(rng, &mut issued)?;
        pairs.push((first, last));
    }
    Ok(pairs)
}
