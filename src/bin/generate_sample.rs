//! Writes a plausible `weights.csv` so the viewer can be exercised without
//! running the simulation: end weights near the Sjöström (2001) means with a
//! small deterministic jitter.

/// Stimulation frequencies of the published protocol, in Hz.
const FREQUENCIES: [f64; 5] = [0.1, 10.0, 20.0, 40.0, 50.0];

/// (Δt in ms, published mean fractional weight change per frequency).
const CONDITIONS: [(f64, [f64; 5]); 2] = [
    (-10.0, [-0.29, -0.41, -0.34, 0.56, 0.75]),
    (10.0, [-0.04, 0.14, 0.29, 0.53, 0.56]),
];

/// Weight every pairing run starts from; end weights are written as
/// `baseline * (1 + mean) + jitter`, clamped to [0, 1].
const BASELINE_WEIGHT: f64 = 0.5;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = "weights.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["frequency", "delta_t", "weight"])
        .expect("Failed to write header");

    // One partition after the other, both over the same frequency order, so
    // the viewer's alignment check holds.
    let mut rows = 0usize;
    for (delta_t, means) in CONDITIONS {
        for (&freq, &mean) in FREQUENCIES.iter().zip(&means) {
            let weight = (BASELINE_WEIGHT * (1.0 + mean) + rng.gauss(0.0, 0.01)).clamp(0.0, 1.0);
            writer
                .write_record([
                    freq.to_string(),
                    delta_t.to_string(),
                    format!("{weight:.6}"),
                ])
                .expect("Failed to write row");
            rows += 1;
        }
    }

    writer.flush().expect("Failed to flush output");
    println!(
        "Wrote {rows} rows ({} frequencies per condition) to {output_path}",
        FREQUENCIES.len()
    );
}
