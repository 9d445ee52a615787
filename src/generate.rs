//! Random sequence pairs with a given length and error rate.
use clap::Parser;
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

pub type Sequence = Vec<u8>;

#[derive(Parser, Clone, Debug, Serialize, Deserialize)]
#[clap(next_help_heading = "Generated input")]
pub struct GenerateArgs {
    /// The number of sequence pairs to generate
    #[clap(short = 'x', long, default_value_t = 1, display_order = 2)]
    pub cnt: usize,

    /// Length of generated sequences
    #[clap(short = 'n', long, display_order = 3)]
    pub length: Option<usize>,

    /// Input error rate
    #[clap(short, long, default_value_t = 0.1, display_order = 4)]
    pub error_rate: f32,

    /// Seed to initialize RNG for reproducability
    #[clap(long)]
    pub seed: Option<u64>,
}

impl GenerateArgs {
    pub fn to_generate_options(&self) -> Option<GenerateOptions> {
        Some(GenerateOptions {
            length: self.length?,
            error_rate: self.error_rate,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerateOptions {
    pub length: usize,
    pub error_rate: f32,
}

const ALPH: [u8; 4] = *b"ACGT";

enum Mutation {
    // Replace char at pos.
    Substitution(usize, u8),
    // Insert char before pos.
    Insertion(usize, u8),
    // Delete char at pos.
    Deletion(usize),
}

fn rand_char(rng: &mut impl Rng) -> u8 {
    ALPH[rng.gen_range(0..ALPH.len())]
}

fn random_mutation(len_b: usize, rng: &mut impl Rng) -> Mutation {
    // Substitution / insertion / deletion all with equal probability.
    // For length 0 sequences, only generate insertions.
    match if len_b == 0 {
        1
    } else {
        rng.gen_range(0..3usize)
    } {
        0 => Mutation::Substitution(rng.gen_range(0..len_b), rand_char(rng)),
        1 => Mutation::Insertion(rng.gen_range(0..len_b + 1), rand_char(rng)),
        2 => Mutation::Deletion(rng.gen_range(0..len_b)),
        _ => unreachable!(),
    }
}

/// A uniform random sequence `a`, and `b` obtained from it by
/// `ceil(error_rate * length)` random substitutions, insertions, and
/// deletions.
pub fn generate_pair(opt: &GenerateOptions, rng: &mut impl Rng) -> (Sequence, Sequence) {
    let a = (0..opt.length).map(|_| rand_char(rng)).collect_vec();
    let num_mutations = ((opt.error_rate * opt.length as f32).ceil() as usize).min(opt.length);
    let mut b = a.clone();
    for _ in 0..num_mutations {
        match random_mutation(b.len(), rng) {
            Mutation::Substitution(i, c) => b[i] = c,
            Mutation::Insertion(i, c) => b.insert(i, c),
            Mutation::Deletion(i) => {
                b.remove(i);
            }
        }
    }
    log::trace!("generated pair of lengths {} and {}", a.len(), b.len());
    (a, b)
}

/// Generate a pair from a fixed seed.
pub fn generate_model(length: usize, error_rate: f32, seed: u64) -> (Sequence, Sequence) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_pair(&GenerateOptions { length, error_rate }, &mut rng)
}
