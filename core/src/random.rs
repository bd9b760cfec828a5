//! Random Pokémon id selection.
//!
//! The upper bound is a fixed snapshot of the species count and is never
//! refreshed from the list endpoint.

use rand::Rng;

/// Highest id handed out by the random picker and accepted by search input.
pub const MAX_POKEMON_ID: u32 = 1010;

/// Map a uniform sample `unit` in `[0, 1)` onto `1..=MAX_POKEMON_ID`.
///
/// Samples outside `[0, 1)` are clamped into range.
pub fn pokemon_id_from_unit(unit: f64) -> u32 {
    let scaled = (unit * f64::from(MAX_POKEMON_ID)).floor();
    if scaled.is_nan() || scaled < 0.0 {
        return 1;
    }
    (scaled as u32).saturating_add(1).min(MAX_POKEMON_ID)
}

/// Draw an id from `rng`.
pub fn random_pokemon_id_with<R: Rng>(rng: &mut R) -> u32 {
    pokemon_id_from_unit(rng.random::<f64>())
}

/// Draw an id from the thread-local generator.
pub fn random_pokemon_id() -> u32 {
    random_pokemon_id_with(&mut rand::rng())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn midpoint_maps_to_506() {
        assert_eq!(pokemon_id_from_unit(0.5), 506);
    }

    #[test]
    fn bounds_of_the_unit_interval() {
        assert_eq!(pokemon_id_from_unit(0.0), 1);
        assert_eq!(pokemon_id_from_unit(0.999_999_9), MAX_POKEMON_ID);
    }

    #[test]
    fn out_of_range_samples_are_clamped() {
        assert_eq!(pokemon_id_from_unit(1.0), MAX_POKEMON_ID);
        assert_eq!(pokemon_id_from_unit(7.5), MAX_POKEMON_ID);
        assert_eq!(pokemon_id_from_unit(-0.3), 1);
        assert_eq!(pokemon_id_from_unit(f64::NAN), 1);
    }

    #[test]
    fn random_ids_stay_in_range() {
        for _ in 0..10_000 {
            let id = random_pokemon_id();
            assert!((1..=MAX_POKEMON_ID).contains(&id), "{id} out of range");
        }
    }

    #[test]
    fn seeded_generator_is_reproducible() {
        let a: Vec<u32> = {
            let mut rng = StdRng::seed_from_u64(7);
            (0..32).map(|_| random_pokemon_id_with(&mut rng)).collect()
        };
        let b: Vec<u32> = {
            let mut rng = StdRng::seed_from_u64(7);
            (0..32).map(|_| random_pokemon_id_with(&mut rng)).collect()
        };
        assert_eq!(a, b);
        assert!(a.iter().all(|id| (1..=MAX_POKEMON_ID).contains(id)));
    }
}
