use tracing::info;

use logogen::api::resize_logo;
use logogen::core::locate::locate_source;
use logogen::types::LOGO_SIZES;

use super::args::CliArgs;

pub fn run(args: CliArgs) -> logogen::Result<()> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    // Fatal precondition: without the source logo the batch never starts.
    let source = locate_source(&args.assets_dir)?;
    info!("Assets directory: {:?}", args.assets_dir);

    println!("Generating logo assets...");
    for spec in LOGO_SIZES {
        let output = args.assets_dir.join(spec.filename);
        match resize_logo(&source, &output, spec.size) {
            Ok(()) => println!("✅ Generated {}", output.display()),
            Err(e) => println!("❌ Error generating {}: {}", output.display(), e),
        }
    }

    // Unconditional banner, kept from the original tool: it does not reflect
    // per-item outcomes.
    println!("\n✅ All logos generated successfully!");
    Ok(())
}
