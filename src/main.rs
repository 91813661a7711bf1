use clap::Parser;
use logo_optimizer::config::PipelineConfig;
use logo_optimizer::imaging::RustBackend;
use logo_optimizer::{pipeline, report};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "logo-optimizer")]
#[command(about = "Generate optimized logo assets: WebP/PNG variants plus favicon.ico")]
#[command(long_about = "\
Generate optimized logo assets: WebP/PNG variants plus favicon.ico

Loads public/blackpiston-logo.png and writes to public/optimized/:

  logo-1024.webp / logo-1024.png   # master
  logo-512.webp  / logo-512.png    # header
  logo-256.webp  / logo-256.png    # ui
  logo-64.webp   / logo-64.png     # favicon-base
  favicon.ico                      # 16/32/48/64 px frames

WebP outputs are lossy (quality 92, maximum compression effort); PNG
outputs are lossless at best compression. Outputs are overwritten on
rerun. Paths and sizes are fixed — there are no flags and no config file.")]
#[command(version = version_string())]
struct Cli {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    Cli::parse();

    let config = PipelineConfig::stock();
    let backend = RustBackend::new();
    let result = pipeline::run(&config, &backend)?;
    report::print_report(&result);

    Ok(())
}
