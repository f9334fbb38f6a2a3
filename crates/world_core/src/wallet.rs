//! Tiered wallet with 100-for-1 carry promotion.

use crate::chunk::TokenTier;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wallet {
    pub bronze: u64,
    pub silver: u64,
    pub gold: u64,
}

impl Wallet {
    /// Credit one token and promote carries immediately.
    pub fn credit(&mut self, tier: TokenTier) {
        match tier {
            TokenTier::Bronze => self.bronze += 1,
            TokenTier::Silver => self.silver += 1,
            TokenTier::Gold => self.gold += 1,
        }
        self.normalize();
    }

    /// Promote 100 bronze to 1 silver and 100 silver to 1 gold, keeping
    /// remainders. Bronze first, so a bronze carry can cascade to gold in
    /// the same pass.
    pub fn normalize(&mut self) {
        self.silver += self.bronze / 100;
        self.bronze %= 100;
        self.gold += self.silver / 100;
        self.silver %= 100;
    }

    /// Total value in bronze units.
    #[must_use]
    pub fn total_bronze(&self) -> u64 {
        self.bronze + self.silver * 100 + self.gold * 10_000
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hundred_bronze_promotes_with_no_remainder() {
        let mut w = Wallet::default();
        for _ in 0..100 {
            w.credit(TokenTier::Bronze);
        }
        assert_eq!(
            w,
            Wallet {
                bronze: 0,
                silver: 1,
                gold: 0
            }
        );
    }

    #[test]
    fn remainder_stays_behind() {
        let mut w = Wallet {
            bronze: 150,
            silver: 0,
            gold: 0,
        };
        w.normalize();
        assert_eq!(
            w,
            Wallet {
                bronze: 50,
                silver: 1,
                gold: 0
            }
        );
    }

    #[test]
    fn bronze_carry_cascades_to_gold() {
        let mut w = Wallet {
            bronze: 100,
            silver: 99,
            gold: 0,
        };
        w.normalize();
        assert_eq!(
            w,
            Wallet {
                bronze: 0,
                silver: 0,
                gold: 1
            }
        );
        assert_eq!(w.total_bronze(), 10_000);
    }

    #[test]
    fn never_holds_a_promotable_pile() {
        let mut w = Wallet::default();
        for i in 0..2_500 {
            w.credit(if i % 3 == 0 {
                TokenTier::Silver
            } else {
                TokenTier::Bronze
            });
            assert!(w.bronze < 100 && w.silver < 100);
        }
    }
}
