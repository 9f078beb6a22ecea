use crate::cli::FilterArgs;
use crate::error::{CliError, Result};
use psgeom::core::filter::apply_litho_filter;
use psgeom::core::io::table::TableFormat;
use psgeom::engine::error::EngineError;
use tracing::info;

pub fn run(args: FilterArgs) -> Result<()> {
    let input_format = TableFormat::from_path(&args.input);
    let output_format = TableFormat::from_path(&args.output);

    info!("Loading grid table from {:?}", &args.input);
    let mut table =
        input_format
            .read_from_path(&args.input)
            .map_err(|e| CliError::FileParsing {
                path: args.input.clone(),
                source: e.into(),
            })?;

    apply_litho_filter(&mut table, args.lower, args.upper).map_err(EngineError::from)?;
    output_format
        .write_to_path(&table, &args.output)
        .map_err(EngineError::from)?;

    println!(
        "✓ Filtered {} records into: {}",
        table.len(),
        args.output.display()
    );
    Ok(())
}
