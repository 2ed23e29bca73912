use std::path::Path;
use std::process::ExitCode;

use clockicons::config::ICON_SPECS;
use clockicons::generate;
use clockicons::logger;

fn main() -> ExitCode {
    logger::init();

    let root = Path::new(".");
    let result = generate::generate_all(root, &ICON_SPECS, |spec, _path| {
        println!("Created {} ({}x{})", spec.path, spec.size, spec.size);
    });

    match result {
        Ok(_) => {
            println!("✅ All icons created successfully!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            logger::log_causes("icon generation failed", &e);
            eprintln!("❌ Error creating icons: {}", e);
            ExitCode::FAILURE
        }
    }
}
