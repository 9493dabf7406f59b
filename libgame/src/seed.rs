use strum::{Display, EnumString, VariantNames};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
#[strum(serialize_all = "snake_case")]
pub enum SeedMode {
    Glider,
    Random,
}

/// Relative positions of the glider pattern laid down by `seed_glider`.
pub const GLIDER: [[isize; 2]; 5] = [[1, 1], [2, 2], [3, 2], [1, 3], [2, 3]];

pub const RANDOM_ALIVE_PROBABILITY: f64 = 0.5;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::VariantNames;

    use super::*;

    #[test]
    fn parses_lowercase_names() {
        assert_eq!(SeedMode::from_str("glider"), Ok(SeedMode::Glider));
        assert_eq!(SeedMode::from_str("random"), Ok(SeedMode::Random));
        assert!(SeedMode::from_str("Glider").is_err());
        assert!(SeedMode::from_str("blinker").is_err());
    }

    #[test]
    fn variant_names_are_the_accepted_inputs() {
        assert_eq!(SeedMode::VARIANTS, &["glider", "random"]);
        assert_eq!(SeedMode::Random.to_string(), "random");
    }
}
