use std::fmt;

/// Compact-object class of an inferred central mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Ultramassive,
    Supermassive,
    IntermediateMass,
    Stellar,
    Micro,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Ultramassive,
        Category::Supermassive,
        Category::IntermediateMass,
        Category::Stellar,
        Category::Micro,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Ultramassive => "Ultramassive black hole",
            Category::Supermassive => "Supermassive black hole",
            Category::IntermediateMass => "Intermediate-mass black hole",
            Category::Stellar => "Stellar black hole",
            Category::Micro => "Micro black hole",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify `m` by multiples of `m_sun`, checking the largest range first:
///
/// | range (× M_sun) | category |
/// |---|---|
/// | (1e9, 1e11) | ultramassive |
/// | (1e6, 1e9]  | supermassive |
/// | (1e2, 1e5]  | intermediate-mass |
/// | (2, 150]    | stellar |
/// | otherwise   | micro |
///
/// Gaps between the ranges fall through to micro. The stellar and
/// intermediate-mass windows overlap on (100, 150]; intermediate-mass wins.
pub fn classify_mass(m: f64, m_sun: f64) -> Category {
    if m > 1e9 * m_sun && m < 1e11 * m_sun {
        Category::Ultramassive
    } else if m > 1e6 * m_sun && m <= 1e9 * m_sun {
        Category::Supermassive
    } else if m > 1e2 * m_sun && m <= 1e5 * m_sun {
        Category::IntermediateMass
    } else if m > 2.0 * m_sun && m <= 150.0 * m_sun {
        Category::Stellar
    } else {
        Category::Micro
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUN: f64 = 1.989e30;

    fn class(multiple: f64) -> Category {
        classify_mass(multiple * SUN, SUN)
    }

    #[test]
    fn interior_points() {
        assert_eq!(class(5e9), Category::Ultramassive);
        assert_eq!(class(4e6), Category::Supermassive);
        assert_eq!(class(1e3), Category::IntermediateMass);
        assert_eq!(class(10.0), Category::Stellar);
        assert_eq!(class(1.0), Category::Micro);
    }

    #[test]
    fn lower_bounds_are_exclusive() {
        assert_eq!(class(1e9 * (1.0 + 1e-9)), Category::Ultramassive);
        assert_eq!(class(1e6), Category::Micro);
        // not above the intermediate-mass floor, but still inside the stellar window
        assert_eq!(class(1e2), Category::Stellar);
        assert_eq!(class(2.0), Category::Micro);
    }

    #[test]
    fn upper_bounds_follow_the_table() {
        assert_eq!(class(1e9), Category::Supermassive);
        assert_eq!(class(1e11), Category::Micro);
        assert_eq!(class(1e5), Category::IntermediateMass);
        assert_eq!(class(100.0), Category::Stellar);
    }

    #[test]
    fn intermediate_shadows_upper_stellar_range() {
        assert_eq!(class(120.0), Category::IntermediateMass);
        assert_eq!(class(150.0), Category::IntermediateMass);
        assert_eq!(class(151.0), Category::IntermediateMass);
    }

    #[test]
    fn gaps_fall_through_to_micro() {
        assert_eq!(class(5e5), Category::Micro);
        assert_eq!(class(1e12), Category::Micro);
        assert_eq!(class(0.0), Category::Micro);
        assert_eq!(class(-3.0), Category::Micro);
    }

    #[test]
    fn total_over_a_wide_sweep() {
        let mut exp = -3.0;
        while exp <= 13.0 {
            let c = class(10f64.powf(exp));
            assert!(Category::ALL.contains(&c));
            assert_eq!(c, class(10f64.powf(exp)));
            exp += 0.01;
        }
    }

    #[test]
    fn labels() {
        assert_eq!(Category::IntermediateMass.to_string(), "Intermediate-mass black hole");
        assert_eq!(Category::Micro.label(), "Micro black hole");
    }
}
