/// Birth/survival neighbor counts. Only the classic B3/S23 rule exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub birth: &'static [usize],
    pub survive: &'static [usize],
}

impl Rule {
    pub const CONWAY: Rule = Rule {
        birth: &[3],
        survive: &[2, 3],
    };

    pub fn next_alive(&self, alive: bool, alive_neighbor_count: usize) -> bool {
        if alive {
            self.survive.contains(&alive_neighbor_count)
        } else {
            self.birth.contains(&alive_neighbor_count)
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::CONWAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conway_rule_table() {
        let rule = Rule::default();

        for count in 0..=8 {
            assert_eq!(rule.next_alive(true, count), count == 2 || count == 3);
            assert_eq!(rule.next_alive(false, count), count == 3);
        }
    }
}
