use anyhow::Result;
use app_icon_gen::{
    icon_gen::DEFAULT_OUTPUT_DIR, layout::ICON_SIZE, palette::Palette, verify::check_icon_dir,
};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let dir = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()));
    let palette = match args.next() {
        Some(path) => Palette::from_json_file(Path::new(&path))?,
        None => Palette::default(),
    };

    println!("Checking icons in: {}", dir.display());
    let report = check_icon_dir(&dir, palette.background)?;

    println!(
        "Opaque icon:     {}x{} (alpha channel: {})",
        report.opaque_size.0, report.opaque_size.1, report.opaque_has_alpha
    );
    println!(
        "Foreground icon: {}x{} ({} shape pixels)",
        report.foreground_size.0, report.foreground_size.1, report.foreground_shape_pixels
    );
    println!(
        "Layers match: {} ({} mismatched pixels)",
        report.layers_match, report.mismatched_pixels
    );
    println!("Shapes fully opaque: {}", report.foreground_fully_opaque);

    if !report.is_valid(ICON_SIZE) {
        anyhow::bail!("⚠ Icon pair in {} failed verification", dir.display());
    }

    println!("✓ Icon pair verified!");
    Ok(())
}
