use std::process::ExitCode;

use imgmeta::Image;
use tracing_subscriber::prelude::*;

fn main() -> ExitCode {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: imgmeta-dump <image>");
        return ExitCode::FAILURE;
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    match dump(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{path}: {err}");
            ExitCode::FAILURE
        }
    }
}

fn dump(path: &str) -> imgmeta::Result<()> {
    let mut image = Image::open(path)?;
    image.read_metadata()?;

    println!("Type:\t{}", image.mime_type());
    if let (Some(width), Some(height)) = (image.pixel_width(), image.pixel_height()) {
        println!("Size:\t{width}x{height}");
    }

    for key in image.exif_keys()? {
        match image.exif_tag(&key) {
            Ok(tag) => println!(
                "{key}\t{}\t{}\t{}",
                tag.type_name, tag.raw_value, tag.human_value
            ),
            Err(err) => println!("{key}\t{err}"),
        }
    }

    for key in image.iptc_keys()? {
        match image.iptc_tag(&key) {
            Ok(tag) => println!("{key}\t{}\t{}", tag.type_name, tag.raw_values.join(", ")),
            Err(err) => println!("{key}\t{err}"),
        }
    }

    for key in image.xmp_keys()? {
        match image.xmp_tag(&key) {
            Ok(tag) => println!("{key}\t{}\t{}", tag.type_name, tag.raw_value),
            Err(err) => println!("{key}\t{err}"),
        }
    }

    for (i, preview) in image.previews()?.iter().enumerate() {
        println!(
            "Preview {i}:\t{} {}x{}, {} bytes",
            preview.mime_type(),
            preview.width(),
            preview.height(),
            preview.size()
        );
    }

    if let Some(location) = image.gps_location()? {
        println!("Location:\t{:?}", location);
    }
    if let Some(date) = image.date_time_original()? {
        println!("Date:\t{date}");
    }

    Ok(())
}
