use crate::reports;
use clap::Args;
use corpusforge::comparator::compare;
use corpusforge::error::CfResult;
use corpusforge::table::load_table;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Ground-truth frequency table (reference oracle output).
    pub truth: String,

    /// Frequency table emitted by the counter under test.
    pub candidate: String,
}

pub fn run(args: CompareArgs) -> CfResult<bool> {
    info!("🔎 Comparing '{}' vs '{}'", args.truth, args.candidate);

    let expected = load_table(&args.truth)?;
    let actual = load_table(&args.candidate)?;

    let verdict = compare(&expected, &actual);
    reports::print_verdict(&verdict);

    Ok(verdict.is_pass())
}
