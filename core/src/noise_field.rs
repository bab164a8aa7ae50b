use crate::NoiseGenerator;
use crate::gradient::gradient_x;
use crate::seed::SeedSource;

// Lattice period along each axis
const PERIOD: usize = 256;
// Fractional seeds in (0, 1) are expanded into this integer range
const FRACTIONAL_SEED_SCALE: f64 = 65536.0;

/// Seeded 2D gradient noise over a 256-periodic integer lattice.
///
/// Both tables are rebuilt as a whole on every [`NoiseField::seed`] call and
/// only read by [`NoiseField::sample`], so a field shared between threads
/// needs the caller to serialize reseeding against sampling.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseField {
    seed: i32,            // normalized seed the tables were built from
    perm: [u8; 512],      // permutation table (256 duplicated)
    grad_p: [f64; 512],   // cached gradient x component per perm entry
}

impl NoiseField {
    pub fn new() -> Self {
        Self::with_seed(0.0)
    }

    pub fn with_seed(seed: f64) -> Self {
        let mut field = Self {
            seed: 0,
            perm: [0; 512],
            grad_p: [0.0; 512],
        };
        field.seed(seed);
        field
    }

    // Build a field from an injected seed source instead of ambient entropy
    pub fn from_source<S: SeedSource + ?Sized>(source: &mut S) -> Self {
        Self::with_seed(source.next_seed())
    }

    /// Rebuild the permutation and gradient tables from `value`.
    ///
    /// The identity permutation `p[i] = i` is never shuffled. Odd indices are
    /// XORed with the low seed byte and even indices with the second byte, so
    /// reseeding with the same value always yields the same tables.
    pub fn seed(&mut self, value: f64) {
        let seed = normalize_seed(value);
        let low = (seed & 255) as u8;
        let high = ((seed >> 8) & 255) as u8;

        for i in 0..PERIOD {
            let base = i as u8;
            let v = if i & 1 == 1 { base ^ low } else { base ^ high };
            // Duplicated so lookups of X + 1 + perm[Y + 1] never need a modulo
            self.perm[i] = v;
            self.perm[i + PERIOD] = v;

            let g = gradient_x(v);
            self.grad_p[i] = g;
            self.grad_p[i + PERIOD] = g;
        }
        self.seed = seed;

        log::debug!("noise field reseeded: raw={value} normalized={seed}");
    }

    /// Raw noise at (x, y). Stays close to [-1, 1]; nothing is clamped and
    /// non-finite input comes back as non-finite output.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        // Which lattice cell contains the point
        let x0 = x.floor();
        let y0 = y.floor();
        // Where inside that cell
        let fx = x - x0;
        let fy = y - y0;
        // Wrap the cell coordinates into the 256 period
        let xi = (to_int32(x0) & 255) as usize;
        let yi = (to_int32(y0) & 255) as usize;

        let row0 = self.perm[yi] as usize;
        let row1 = self.perm[yi + 1] as usize;

        // Corner contributions: (0,0) (0,1) (1,0) (1,1)
        let n00 = corner(self.grad_p[xi + row0], fx, fy);
        let n01 = corner(self.grad_p[xi + row1], fx, fy - 1.0);
        let n10 = corner(self.grad_p[xi + 1 + row0], fx - 1.0, fy);
        let n11 = corner(self.grad_p[xi + 1 + row1], fx - 1.0, fy - 1.0);

        let u = fade(fx);
        lerp(lerp(n00, n10, u), lerp(n01, n11, u), fade(fy))
    }

    pub fn normalized_seed(&self) -> i32 {
        self.seed
    }

    pub fn perm(&self) -> &[u8; 512] {
        &self.perm
    }

    pub fn grad_p(&self) -> &[f64; 512] {
        &self.grad_p
    }
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseGenerator for NoiseField {
    fn get2(&self, x: f64, y: f64) -> f64 {
        self.sample(x, y)
    }
}

/// Turn an arbitrary real seed into the 32-bit integer the tables use.
///
/// Values in (0, 1) are scaled by 65536 first, then floored. Seeds below
/// 256 get their low byte copied into the second byte so both bytes consumed
/// by the table construction carry entropy.
pub fn normalize_seed(value: f64) -> i32 {
    let mut value = value;
    if value > 0.0 && value < 1.0 {
        value *= FRACTIONAL_SEED_SCALE;
    }

    let floored = value.floor();
    let mut seed = to_int32(floored);
    if floored < 256.0 {
        seed |= seed << 8;
    }
    seed
}

// Quintic smoothstep 6t^5 - 15t^4 + 10t^3
// First and second derivatives vanish at t=0 and t=1
#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

// Linear interpolation, weighted-sum form
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}

// The cached gradient is the x component only, i.e. the vector (g, 0),
// so the y offset never contributes to a corner.
#[inline]
fn corner(g: f64, dx: f64, _dy: f64) -> f64 {
    g * dx
}

// Two's-complement 32-bit wrap of an already floored value.
// Non-finite values map to 0.
#[inline]
fn to_int32(v: f64) -> i32 {
    if !v.is_finite() {
        return 0;
    }
    v.rem_euclid(4_294_967_296.0) as u32 as i32
}
