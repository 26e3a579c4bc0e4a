use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use occurkit_io_pdf::conf::C_DIR_OUTPUT_DEFAULT;
use occurkit_io_xlsx::{C_FILE_STORE_DEFAULT, C_SHEET_NAME_DEFAULT};
use occurkit_web::conf::{C_BIND_DEFAULT, C_ENV_BIND, C_ENV_PDF_DIR, C_ENV_STORE_PATH};
use occurkit_web::{FormGateway, SpecGatewayOptions, build_router};

#[derive(Debug, Parser)]
#[command(name = "occurkit_web", about = "Occurrence-report form server")]
struct Args {
    /// Listen address.
    #[arg(long, env = C_ENV_BIND, default_value = C_BIND_DEFAULT)]
    bind: SocketAddr,

    /// Workbook accumulating saved reports.
    #[arg(long, env = C_ENV_STORE_PATH, default_value = C_FILE_STORE_DEFAULT)]
    store_path: PathBuf,

    /// Directory receiving rendered documents.
    #[arg(long, env = C_ENV_PDF_DIR, default_value = C_DIR_OUTPUT_DEFAULT)]
    pdf_dir: PathBuf,

    /// Worksheet receiving the rows.
    #[arg(long, default_value = C_SHEET_NAME_DEFAULT)]
    sheet_name: String,

    /// Log filter directive.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Append logs to this file instead of stdout.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    occurkit_log::init_tracing(&args.log_level, args.log_file.as_deref())?;

    let options = SpecGatewayOptions {
        bind: args.bind,
        path_file_store: args.store_path,
        path_dir_pdf: args.pdf_dir,
        sheet_name: args.sheet_name,
    };
    let app = build_router(FormGateway::new(&options));

    info!(
        addr = %options.bind,
        store = %options.path_file_store.display(),
        pdf_dir = %options.path_dir_pdf.display(),
        "occurkit_web listening"
    );
    let listener = tokio::net::TcpListener::bind(options.bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}
