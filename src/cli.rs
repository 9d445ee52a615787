use crate::generate::GenerateArgs;
use crate::{distance_only, Cost, CostModel, Levenshtein};
use anyhow::{bail, Context};
use clap::{value_parser, Parser};
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, Write},
    path::PathBuf,
};

/// Compute the edit distance and an optimal edit script between pairs of sequences.
#[derive(Parser, Serialize, Deserialize)]
#[clap(author, about, disable_version_flag(true))]
#[clap(group(
    clap::ArgGroup::new("input_type")
        .args(&["source", "input", "length"]),
))]
pub struct Cli {
    /// The source sequence.
    #[clap(requires = "target", display_order = 0)]
    pub source: Option<String>,

    /// The target sequence.
    #[clap(requires = "source", display_order = 0)]
    pub target: Option<String>,

    /// A .seq or .txt file with sequence pairs to align.
    #[clap(short, long, value_parser = value_parser!(PathBuf), display_order = 1)]
    pub input: Option<PathBuf>,

    /// Write a .csv of `{cost},{cigar}` lines
    #[clap(short, long, value_parser = value_parser!(PathBuf), display_order = 1)]
    pub output: Option<PathBuf>,

    #[clap(flatten)]
    pub costs: CostArgs,

    /// Split sequences on whitespace and align words instead of characters.
    #[clap(short, long)]
    pub words: bool,

    /// Print the distance matrix.
    #[clap(short, long)]
    pub matrix: bool,

    /// Print the table of edit operations.
    #[clap(long)]
    pub ops: bool,

    /// Print one JSON object per pair instead of plain text.
    #[clap(long, conflicts_with_all = ["matrix", "ops"])]
    pub json: bool,

    /// Only compute the distance, using linear memory.
    #[clap(long, conflicts_with_all = ["matrix", "ops", "json", "output"])]
    pub distance_only: bool,

    /// Options to generate an input pair.
    #[clap(flatten)]
    pub generate: GenerateArgs,
}

#[derive(Parser, Serialize, Deserialize, Debug, Clone)]
#[clap(next_help_heading = "Costs")]
pub struct CostArgs {
    /// JSON file with `ins`, `del`, and `sub` fields.
    #[clap(long, value_parser = value_parser!(PathBuf))]
    pub costs: Option<PathBuf>,

    /// Insertion cost. Overrides the costs file.
    #[clap(long, allow_negative_numbers = true)]
    pub ins: Option<Cost>,

    /// Deletion cost. Overrides the costs file.
    #[clap(long, allow_negative_numbers = true)]
    pub del: Option<Cost>,

    /// Substitution cost. Overrides the costs file.
    #[clap(long, allow_negative_numbers = true)]
    pub sub: Option<Cost>,
}

impl CostArgs {
    /// Unit costs, overridden by the costs file, overridden by explicit flags.
    /// Negative costs are rejected later by the aligner.
    pub fn cost_model(&self) -> anyhow::Result<CostModel> {
        let mut cm = match &self.costs {
            Some(path) => {
                let s = std::fs::read_to_string(path)
                    .with_context(|| format!("reading costs file {}", path.display()))?;
                serde_json::from_str(&s)
                    .with_context(|| format!("parsing costs file {}", path.display()))?
            }
            None => CostModel::unit(),
        };
        if let Some(ins) = self.ins {
            cm.ins = ins;
        }
        if let Some(del) = self.del {
            cm.del = del;
        }
        if let Some(sub) = self.sub {
            cm.sub = sub;
        }
        Ok(cm)
    }
}

/// A single aligned pair, as printed by `--json`.
#[derive(Serialize)]
struct PairResult<'a> {
    source: &'a str,
    target: &'a str,
    costs: CostModel,
    distance: Cost,
    cigar: String,
    edit_ops: &'a [crate::EditOp],
}

impl Cli {
    /// Call the given function for each pair in the input.
    pub fn process_input_pairs(
        &self,
        mut run_pair: impl FnMut(&str, &str) -> anyhow::Result<()>,
    ) -> anyhow::Result<()> {
        if let (Some(a), Some(b)) = (&self.source, &self.target) {
            run_pair(a, b)?;
            return Ok(());
        }

        if let Some(input) = &self.input {
            // Parse file
            let files = if input.is_file() {
                vec![input.clone()]
            } else {
                input
                    .read_dir()
                    .with_context(|| format!("{} is not a file or directory", input.display()))?
                    .map(|x| Ok(x?.path()))
                    .collect::<std::io::Result<Vec<_>>>()?
            };

            for f in files {
                let ext = f.extension().and_then(|e| e.to_str()).unwrap_or_default();
                if ext != "seq" && ext != "txt" {
                    bail!("Unknown file extension {ext:?} of {}. Must be in {{seq,txt}}.", f.display());
                }
                let file = File::open(&f).with_context(|| format!("opening {}", f.display()))?;
                let lines = BufReader::new(file).lines().collect::<Result<Vec<_>, _>>()?;
                if lines.len() % 2 != 0 {
                    bail!("{}: odd number of lines, expected pairs", f.display());
                }
                for (a, b) in lines.iter().tuples() {
                    let (a, b) = if ext == "seq" {
                        match (a.strip_prefix('>'), b.strip_prefix('<')) {
                            (Some(a), Some(b)) => (a, b),
                            _ => bail!("{}: expected lines starting with '>' and '<'", f.display()),
                        }
                    } else {
                        (a.as_str(), b.as_str())
                    };
                    run_pair(a, b)?;
                }
            }
            return Ok(());
        }

        // Generate random input.
        let Some(opt) = self.generate.to_generate_options() else {
            bail!("Pass SOURCE and TARGET, -i <file>, or -n <length> to generate pairs.");
        };
        let seed = self.generate.seed.unwrap_or_else(|| {
            let seed = ChaCha8Rng::from_entropy().gen_range(0..1_000);
            log::info!("Seed: {seed}");
            seed
        });
        let rng = &mut ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..self.generate.cnt {
            let (a, b) = crate::generate::generate_pair(&opt, rng);
            let (a, b) = (String::from_utf8(a)?, String::from_utf8(b)?);
            run_pair(&a, &b)?;
        }
        Ok(())
    }

    /// Align one pair and print the requested views to `out`. When given,
    /// a `{cost},{cigar}` line is appended to `csv`.
    pub fn run_pair(
        &self,
        cm: &CostModel,
        a: &str,
        b: &str,
        out: &mut impl Write,
        csv: Option<&mut dyn Write>,
    ) -> anyhow::Result<()> {
        if self.words {
            let ta = a.split_whitespace().collect_vec();
            let tb = b.split_whitespace().collect_vec();
            self.run_tokens(cm, &ta, &tb, (a, b), out, csv)
        } else {
            let ta = a.chars().collect_vec();
            let tb = b.chars().collect_vec();
            self.run_tokens(cm, &ta, &tb, (a, b), out, csv)
        }
    }

    fn run_tokens<T: PartialEq + Display>(
        &self,
        cm: &CostModel,
        a: &[T],
        b: &[T],
        (a_str, b_str): (&str, &str),
        out: &mut impl Write,
        csv: Option<&mut dyn Write>,
    ) -> anyhow::Result<()> {
        if self.distance_only {
            writeln!(out, "{}", distance_only(a, b, cm)?)?;
            return Ok(());
        }

        let l = Levenshtein::new(a, b, *cm)?;
        let cigar = l.cigar();
        if let Some(csv) = csv {
            writeln!(csv, "{},{}", l.distance(), cigar)?;
        }

        if self.json {
            let r = PairResult {
                source: a_str,
                target: b_str,
                costs: *cm,
                distance: l.distance(),
                cigar: cigar.to_string(),
                edit_ops: l.edit_ops(),
            };
            writeln!(out, "{}", serde_json::to_string(&r)?)?;
            return Ok(());
        }

        writeln!(out, "{}\t{}", l.distance(), cigar)?;
        if self.matrix {
            write!(out, "{}", l.matrix_view())?;
        }
        if self.ops {
            write!(out, "{}", l.edit_ops_view())?;
        }
        Ok(())
    }
}
