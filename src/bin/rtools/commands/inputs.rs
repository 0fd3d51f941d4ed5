use anyhow::{Context, Result};

use radmc_tools::bundle::{BundleConfig, write_bundle};
use radmc_tools::disk::{DiskParams, build_model, load_params};

use crate::cli::ToRadmc3dArgs;
use crate::display::{
    Context as DisplayContext, Progress, print_bundle_summary, print_model_summary,
};
use crate::io::read_text;

const TOTAL_STEPS: u8 = 3;

pub fn run(args: ToRadmc3dArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.begin("Loading disk model");
    let params = load_model_params(&args)?;
    progress.done([model_source(&args)]);

    progress.begin("Evaluating fields");
    let model = build_model(&params).context("Failed to evaluate the disk model")?;
    progress.done([
        "Temperature and velocity".to_string(),
        format!("{} molecule(s), {} dust species", params.molecules.len(), params.dust.len()),
    ]);

    if ctx.interactive {
        print_model_summary(&model);
    }

    progress.begin("Writing input bundle");
    let config = bundle_config(&args, &params)?;
    let report = write_bundle(&model, &config).context("Failed to write the input bundle")?;
    progress.done([
        format!("Staged {} table(s)", report.staged.len()),
        format!("Wrote {} file(s)", report.written.len()),
    ]);

    if ctx.interactive {
        print_bundle_summary(&report);
    }

    progress.finish("Input bundle complete");
    Ok(())
}

fn load_model_params(args: &ToRadmc3dArgs) -> Result<DiskParams> {
    let custom = args.model.as_deref().map(read_text).transpose()?;
    load_params(custom.as_deref()).context("Failed to load the disk model")
}

fn model_source(args: &ToRadmc3dArgs) -> String {
    match &args.model {
        Some(path) => format!("Read {}", path.display()),
        None => "Built-in example disk".to_string(),
    }
}

fn bundle_config(args: &ToRadmc3dArgs, params: &DiskParams) -> Result<BundleConfig> {
    let mut options = params
        .radmc_options()
        .context("Invalid [radmc3d] options in the disk model")?;
    if let Some(threads) = args.threads {
        options.set("setthreads", threads);
    }

    Ok(BundleConfig {
        output_dir: args.output.clone(),
        tables_dir: args.tables.clone(),
        options,
        ..BundleConfig::default()
    })
}
