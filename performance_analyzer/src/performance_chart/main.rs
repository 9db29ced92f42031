//!
//! The performance chart binary.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    env_logger::init();

    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => performance_analyzer::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            performance_analyzer::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let report = performance_analyzer::Report::try_from(arguments.input_path)?;

    std::fs::create_dir_all(arguments.output_directory.as_path()).map_err(|error| {
        anyhow::anyhow!(
            "Output directory {:?} creating: {error}",
            arguments.output_directory
        )
    })?;

    for build_type in arguments.build_types.iter() {
        let table = match performance_analyzer::ChartTable::new(&report, build_type.as_str()) {
            Some(table) => table,
            None => {
                log::warn!("No runs with build type `{build_type}`, skipping");
                continue;
            }
        };
        let charts = performance_analyzer::Charts::new(table);

        let path = arguments.output_directory.join(charts.file_name());
        if !arguments.quiet {
            println!(
                "    {} {} charts for {} runs to {path:?}",
                "Charting".bright_green().bold(),
                build_type,
                charts.table.rows.len(),
            );
        }
        charts
            .workbook()?
            .save(path.as_path())
            .map_err(|error| anyhow::anyhow!("Chart file {path:?} writing: {error}"))?;
    }

    Ok(())
}
