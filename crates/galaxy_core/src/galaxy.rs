use crate::Star;

/// Backing-store capacity of a freshly created galaxy.
pub const INITIAL_CAPACITY: usize = 10;

/// An ordered, growable collection of stars.
/// Insertion order is meaningful and preserved. The galaxy owns its
/// stars by value; dropping the galaxy drops every star with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Galaxy {
    stars: Vec<Star>,
}

impl Galaxy {
    /// An empty galaxy with room for [`INITIAL_CAPACITY`] stars.
    pub fn new() -> Self {
        Self {
            stars: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Append a star at index `len()`, taking ownership of it.
    /// When the backing store is full, capacity grows to
    /// `floor(capacity * 1.5) + 1` and existing stars keep their order.
    pub fn add(&mut self, star: Star) {
        if self.stars.len() == self.stars.capacity() {
            let grown = self.stars.capacity() * 3 / 2 + 1;
            self.stars.reserve_exact(grown - self.stars.len());
        }
        self.stars.push(star);
    }

    /// Number of stars currently in the galaxy.
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Reserved storage, in stars. An implementation detail of the
    /// growth strategy; not part of the serialized state.
    pub fn capacity(&self) -> usize {
        self.stars.capacity()
    }

    /// The stars in insertion order.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Mutable view of the stars, for integrators stepping them in place.
    pub fn stars_mut(&mut self) -> &mut [Star] {
        &mut self.stars
    }
}

impl Default for Galaxy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star_with_mass(mass: f64) -> Star {
        Star {
            mass,
            ..Star::new()
        }
    }

    #[test]
    fn test_new_galaxy_is_empty_with_initial_capacity() {
        let galaxy = Galaxy::new();
        assert!(galaxy.is_empty());
        assert_eq!(galaxy.len(), 0);
        assert_eq!(galaxy.capacity(), INITIAL_CAPACITY);
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut galaxy = Galaxy::new();
        for i in 0..5 {
            galaxy.add(star_with_mass(i as f64));
        }

        assert_eq!(galaxy.len(), 5);
        for (i, star) in galaxy.stars().iter().enumerate() {
            assert_eq!(star.mass, i as f64);
        }
    }

    #[test]
    fn test_growth_follows_one_and_a_half_plus_one() {
        let mut galaxy = Galaxy::new();

        for _ in 0..10 {
            galaxy.add(Star::new());
        }
        assert_eq!(galaxy.capacity(), 10);

        // 11th star triggers the first growth: floor(10 * 1.5) + 1
        galaxy.add(Star::new());
        assert_eq!(galaxy.capacity(), 16);

        for _ in 11..16 {
            galaxy.add(Star::new());
        }
        galaxy.add(Star::new());
        assert_eq!(galaxy.capacity(), 25);
        assert_eq!(galaxy.len(), 17);
    }

    #[test]
    fn test_growth_preserves_order() {
        let mut galaxy = Galaxy::new();
        for i in 0..23 {
            galaxy.add(star_with_mass(i as f64));
        }

        assert_eq!(galaxy.len(), 23);
        for (i, star) in galaxy.stars().iter().enumerate() {
            assert_eq!(star.mass, i as f64);
        }
    }

    #[test]
    fn test_stars_mut_allows_in_place_stepping() {
        let mut galaxy = Galaxy::new();
        galaxy.add(Star::new());

        galaxy.stars_mut()[0].position = [1.0, 2.0, 3.0];
        assert_eq!(galaxy.stars()[0].position, [1.0, 2.0, 3.0]);
    }
}
