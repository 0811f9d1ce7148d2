use std::io::stdout;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use crossterm::style::Stylize;
use env_logger::Env;
use log::info;
use name_sorter_cli::cli_args::Args;
use name_sorter_cli::runner::{self, SortRequest};
use name_sorter_core::error::Result;
use name_sorter_core::file_handling::IoOptions;
use name_sorter_core::{config, file_handling};

fn execute() -> Result<()> {
    let args = Args::parse();

    if args.input_file_path.is_none() {
        Args::command().print_help()?;
        return Ok(());
    }

    let settings_path = config::get_settings_path(&args.settings_path);
    let settings = file_handling::get_settings(&settings_path)?.unwrap_or_default();
    let executable_directory = config::get_executable_directory()?;

    let Some(request) = SortRequest::from_args(&args, &settings, &executable_directory) else {
        return Ok(());
    };
    info!(
        "Sorting `{}` into `{}`",
        request.input_path.display(),
        request.output_path.display()
    );

    let sorted_names = runner::run(&request, IoOptions::default())?;
    runner::print_sorted_names(&mut stdout().lock(), sorted_names.as_deref())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("Error: {e}").red());
            ExitCode::FAILURE
        }
    }
}
