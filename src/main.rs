use anyhow::{Context, bail};
use clap::Parser;
use log::info;

use pdf_viewer::logging::init_logging;
use pdf_viewer::{ExportController, MupdfDocumentFactory, PpmFilePresenter, ViewerOptions};

fn export(options: &ViewerOptions) -> anyhow::Result<()> {
    let Some(request) = options.export_request() else {
        bail!("--export needs a document to render");
    };
    let Some(output) = &options.export else {
        bail!("--export needs an output path");
    };

    let mut controller = ExportController::new(MupdfDocumentFactory::new(), PpmFilePresenter::new());

    let hits = controller
        .generate(&request)
        .with_context(|| format!("cannot render {}", request.document.display()))?;
    if request.search.is_some() {
        info!("{hits} search hits");
    }

    controller
        .write(output)
        .with_context(|| format!("cannot write {}", output.display()))?;

    Ok(())
}

#[cfg(feature = "gui")]
fn run_gui(options: ViewerOptions) -> anyhow::Result<()> {
    use pdf_viewer::{PixelsPresenterFactory, RunGuiCommand};

    RunGuiCommand::new(MupdfDocumentFactory::new(), PixelsPresenterFactory::default(), options).execute()
}

#[cfg(not(feature = "gui"))]
fn run_gui(_options: ViewerOptions) -> anyhow::Result<()> {
    bail!("built without the `gui` feature; use --export to render a page")
}

fn main() -> anyhow::Result<()> {
    let options = ViewerOptions::parse();
    init_logging(options.log_level, options.log_file.as_deref())?;

    if options.export.is_some() {
        export(&options)
    } else {
        run_gui(options)
    }
}
