use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use genstash::api::config_dto::SaveConfigDto;
use genstash::api::workflow_dto::ExtraPngInfoDto;
use genstash::domain::image_saver::image_saver::save_images;
use genstash::domain::workflow::workflow_graph::WorkflowGraph;
use genstash::extract_generation_info_from_file;
use genstash::loader::parser::{load_workflow_graph, parse_json_file};
use genstash::logger;

#[derive(Parser, Debug)]
#[command(name = "genstash", about = "Embed workflow generation info into saved PNG images")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the generation record of a workflow graph as JSON.
    Extract {
        /// Workflow graph JSON (node id -> {class_type, inputs}).
        prompt: PathBuf,
    },
    /// Re-save images as PNG with the generation record embedded.
    Save {
        prompt: PathBuf,

        #[arg(long = "image", required = true)]
        images: Vec<PathBuf>,

        /// JSON object whose entries are embedded as additional text chunks.
        #[arg(long)]
        extra: Option<PathBuf>,

        /// JSON save configuration; flags below override it.
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        output_dir: Option<String>,

        #[arg(long)]
        prefix: Option<String>,

        #[arg(long)]
        folder: Option<String>,

        #[arg(long)]
        no_metadata: bool,
    },
}

fn main() -> anyhow::Result<()> {
    logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Extract { prompt } => {
            let record = extract_generation_info_from_file(&prompt)
                .with_context(|| format!("extracting generation info from '{}'", prompt.display()))?;
            println!("{}", record.to_json()?);
        }
        Command::Save { prompt, images, extra, config, output_dir, prefix, folder, no_metadata } => {
            let mut save_config = match config {
                Some(path) => parse_json_file::<SaveConfigDto>(&path)
                    .with_context(|| format!("loading save config '{}'", path.display()))?,
                None => SaveConfigDto::default(),
            };
            if let Some(output_dir) = output_dir {
                save_config.output_dir = output_dir;
            }
            if let Some(prefix) = prefix {
                save_config.filename_prefix = prefix;
            }
            if let Some(folder) = folder {
                save_config.foldername = folder;
            }
            if no_metadata {
                save_config.save_metadata = false;
            }

            let graph = load_workflow_graph(&prompt)
                .with_context(|| format!("loading workflow graph '{}'", prompt.display()))?
                .map(WorkflowGraph::from);
            let extra_pnginfo = match extra {
                Some(path) => Some(
                    parse_json_file::<ExtraPngInfoDto>(&path)
                        .with_context(|| format!("loading extra pnginfo '{}'", path.display()))?,
                ),
                None => None,
            };

            let decoded = images
                .iter()
                .map(|path| image::open(path).with_context(|| format!("opening image '{}'", path.display())))
                .collect::<anyhow::Result<Vec<_>>>()?;

            let outcome = save_images(&decoded, graph.as_ref(), extra_pnginfo.as_ref(), &save_config)?;
            log::info!("Saved {} image(s).", outcome.images.len());
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }

    Ok(())
}
