/// Park-Miller "minimal standard" multiplicative LCG.
///
/// Produces a reproducible stream of `f64` values in `[0, 1)`. Two instances
/// built from the same seed yield identical sequences; there is no other
/// source of entropy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkMiller {
    state: u32,
}

impl ParkMiller {
    /// Modulus, the Mersenne prime 2^31 - 1.
    pub const MODULUS: u32 = 2_147_483_647;
    /// Multiplier, a primitive root of `MODULUS`.
    pub const MULTIPLIER: u32 = 16_807;

    /// Create a generator. Any seed is accepted: it is reduced modulo
    /// `MODULUS` and non-positive remainders are shifted up by `MODULUS - 1`,
    /// so the state never lands on the absorbing zero.
    pub fn new(seed: i64) -> Self {
        let m = i64::from(Self::MODULUS);
        let mut s = seed % m;
        if s <= 0 {
            s += m - 1;
        }
        // -(M - 1) lands on zero after the shift above
        if s == 0 {
            s = m - 1;
        }
        Self { state: s as u32 }
    }

    /// Current raw state, always in `1..MODULUS`.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance and return the new raw state.
    pub fn next_u31(&mut self) -> u32 {
        let next = u64::from(self.state) * u64::from(Self::MULTIPLIER) % u64::from(Self::MODULUS);
        self.state = next as u32;
        self.state
    }

    /// Advance and return a value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u31()) / f64::from(Self::MODULUS)
    }
}

impl From<blockfield_common::Seed> for ParkMiller {
    fn from(seed: blockfield_common::Seed) -> Self {
        Self::new(i64::from(seed))
    }
}

impl Iterator for ParkMiller {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}
