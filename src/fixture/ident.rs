//! Identifier and reference-code generators.

use rand::Rng;

const UPPER: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ";
const ALNUM: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

fn code(rng: &mut impl Rng, alphabet: &[u8], len: usize) -> String {
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
        .collect()
}

/// A UUID v4 string drawn from `rng`, so seeded runs are reproducible.
pub fn uuid(rng: &mut impl Rng) -> String {
    uuid::Builder::from_random_bytes(rng.random())
        .into_uuid()
        .to_string()
}

/// A US-style tail number, e.g. `N482JX`.
pub fn registration(rng: &mut impl Rng) -> String {
    let digits = rng.random_range(100..1000);
    format!("N{}{}", digits, code(rng, UPPER, 2))
}

/// An air carrier certificate number, e.g. `KX7C412Q`.
pub fn certificate_number(rng: &mut impl Rng) -> String {
    let prefix = code(rng, ALNUM, 4);
    let digits = rng.random_range(100..1000);
    format!("{}{}{}", prefix, digits, code(rng, UPPER, 1))
}

/// A customer-facing booking reference, e.g. `BK-7HQ2MZ`.
pub fn booking_reference(rng: &mut impl Rng) -> String {
    format!("BK-{}", code(rng, ALNUM, 6))
}

/// A payment processor reference, e.g. `pi_3f9a...`.
pub fn processor_reference(rng: &mut impl Rng) -> String {
    format!("pi_{:016x}", rng.random::<u64>())
}

/// One of a small pool of demo customer ids, so customers repeat across rows.
pub fn customer_id(rng: &mut impl Rng) -> String {
    format!("demo-customer-{:03}", rng.random_range(1..=50))
}

/// One of a small pool of demo user ids.
pub fn user_id(rng: &mut impl Rng) -> String {
    format!("demo-user-{:03}", rng.random_range(1..=50))
}
