use anyhow::{anyhow, Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use dq_clean::{run_pipeline, CleanContext};
use dq_ingest::load_raw_bundle;
use dq_model::schema::{raw_file_name, required_columns};
use dq_model::Dataset;
use dq_report::write_outputs;
use dq_validate::parse_datetime;

use crate::cli::CleanArgs;
use crate::summary::apply_table_style;
use crate::types::CleanResult;

pub fn run_datasets() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Dataset", "Raw file", "Required columns"]);
    apply_table_style(&mut table);
    for dataset in Dataset::ALL {
        table.add_row(vec![
            dataset.to_string(),
            raw_file_name(dataset).to_string(),
            required_columns(dataset).join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let span = info_span!("clean", data_dir = %args.data_dir.display());
    let _guard = span.enter();

    let ctx = match &args.as_of {
        Some(raw) => CleanContext::fixed(
            parse_datetime(raw).ok_or_else(|| anyhow!("unparsable --as-of value: {raw}"))?,
        ),
        None => CleanContext::new(),
    };

    // Any load failure aborts here; no partial cleaning is ever written.
    let raw = load_raw_bundle(&args.data_dir).context("load raw datasets")?;
    let outcome = run_pipeline(&raw, &ctx);

    let outputs = if args.dry_run {
        info!("dry run: skipping output files");
        None
    } else {
        let output_dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| args.data_dir.join("cleaned"));
        Some(
            write_outputs(&output_dir, &outcome.cleaned, &outcome.report)
                .context("write cleaned outputs")?,
        )
    };

    Ok(CleanResult {
        report: outcome.report,
        outputs,
    })
}
