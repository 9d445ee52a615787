use anyhow::Context;
use clap::Parser;
use pa_levenshtein::cli::Cli;
use std::{
    fs::File,
    io::{BufWriter, Write},
};

fn main() -> anyhow::Result<()> {
    if std::env::var("PA_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("PA_LOG")
            .write_style("PA_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let args = Cli::parse();
    let cm = args.costs.cost_model()?;
    log::debug!("cost model: {cm:?}");

    let mut csv = match &args.output {
        Some(path) => Some(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => None,
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let mut pairs = 0usize;
    args.process_input_pairs(|a, b| {
        args.run_pair(
            &cm,
            a,
            b,
            &mut out,
            csv.as_mut().map(|w| w as &mut dyn Write),
        )?;
        pairs += 1;
        Ok(())
    })?;
    log::debug!("aligned {pairs} pairs");

    if let Some(csv) = &mut csv {
        csv.flush()?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    #[test]
    fn cli_test() {
        <pa_levenshtein::cli::Cli as clap::CommandFactory>::command().debug_assert();
    }
}
