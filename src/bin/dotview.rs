//! This is the command line tool that loads '.dot' files, renders the
//! graph, saves an SVG file and a PDF copy, and opens the result in the
//! system viewer.

extern crate clap;
extern crate env_logger;
extern crate log;

use clap::{Arg, ArgAction, Command};
use dotview::pdf;
use dotview::render::{self, RenderOptions};
use dotview::view;
use layout::core::utils::save_to_file;
use layout::gv;
use layout::topo::layout::VisualGraph;
use std::fs;
use std::process::exit;

struct CLIOptions {
    render: RenderOptions,
    output_base: String,
    no_view: bool,
}

impl CLIOptions {
    pub fn new() -> Self {
        Self {
            render: RenderOptions::default(),
            output_base: String::new(),
            no_view: false,
        }
    }
}

/// Render the graph and write the SVG file and the PDF copy. Returns
/// the path of the written PDF.
fn generate_files(
    graph: &mut VisualGraph,
    options: &CLIOptions,
) -> Result<String, String> {
    let svg_path = format!("{}.svg", options.output_base);
    let pdf_path = format!("{}.pdf", options.output_base);

    let content = render::render_svg(graph, &options.render);
    save_to_file(&svg_path, &content).map_err(|err| err.to_string())?;

    let bytes = pdf::svg_to_pdf(&content)?;
    pdf::save_to_file(&pdf_path, &bytes).map_err(|err| err.to_string())?;

    Result::Ok(pdf_path)
}

fn main() {
    let matches = Command::new("dotview")
        .version("0.1.0")
        .about("Renders a '.dot' file and saves a PDF copy")
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Enables debug options"),
        )
        .arg(
            Arg::new("no-layout")
                .long("no-layout")
                .action(ArgAction::SetTrue)
                .help("Disable the node layout pass"),
        )
        .arg(
            Arg::new("no-optz")
                .long("no-optz")
                .action(ArgAction::SetTrue)
                .help("Disable the graph optimizations"),
        )
        .arg(
            Arg::new("ast")
                .short('a')
                .long("ast")
                .action(ArgAction::SetTrue)
                .help("Dump the graph AST"),
        )
        .arg(
            Arg::new("no-view")
                .long("no-view")
                .action(ArgAction::SetTrue)
                .help("Do not open the rendered graph in the viewer"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("NAME")
                .help("Base name of the output files"),
        )
        .arg(
            Arg::new("INPUT")
                .help("Sets the input file to use")
                .required(true)
                .index(1),
        )
        .get_matches();

    env_logger::builder().format_timestamp(None).init();

    let dump_ast = matches.get_flag("ast");

    let mut cli = CLIOptions::new();
    cli.render.debug_mode = matches.get_flag("debug");
    cli.render.disable_opt = matches.get_flag("no-optz");
    cli.render.disable_layout = matches.get_flag("no-layout");
    cli.no_view = matches.get_flag("no-view");
    cli.output_base = matches
        .get_one::<String>("output")
        .map(String::as_str)
        .unwrap_or("output")
        .to_string();

    let input_path = matches.get_one::<String>("INPUT").unwrap();
    let contents = match fs::read_to_string(input_path) {
        Result::Ok(contents) => contents,
        Result::Err(err) => {
            log::error!("Could not read the file {}", input_path);
            log::error!("Error: {}", err);
            exit(1);
        }
    };

    let tree = render::parse(&contents);

    let graph = match tree {
        Result::Err(err) => {
            log::error!("Error: {}", err);
            exit(1);
        }

        Result::Ok(graph) => graph,
    };

    if dump_ast {
        gv::dump_ast(&graph);
    }

    let mut vg = render::build_graph(&graph);

    let pdf_path = match generate_files(&mut vg, &cli) {
        Result::Ok(path) => path,
        Result::Err(err) => {
            log::error!("Error: {}", err);
            exit(1);
        }
    };

    if !cli.no_view {
        if let Result::Err(err) = view::open_in_viewer(&pdf_path) {
            log::error!("Could not open the viewer: {}", err);
            exit(1);
        }
    }
}
