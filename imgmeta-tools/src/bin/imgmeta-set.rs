use std::process::ExitCode;

use imgmeta::{Image, Key};
use tracing_subscriber::prelude::*;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [path, key, values @ ..] = args.as_slice() else {
        eprintln!("Usage: imgmeta-set <image> <key> [<value>...]");
        eprintln!("Without values the tag is deleted.");
        return ExitCode::FAILURE;
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    match set(path, key, values) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{path}: {err}");
            ExitCode::FAILURE
        }
    }
}

fn set(path: &str, key: &str, values: &[String]) -> imgmeta::Result<()> {
    let mut image = Image::open(path)?;
    image.read_metadata()?;

    match (key.parse::<Key>()?, values) {
        (Key::Exif(_), []) => image.delete_exif_tag(key)?,
        (Key::Exif(_), [value]) => image.set_exif_tag_value(key, value)?,
        (Key::Exif(_), _) => {
            return Err(imgmeta::Error::InvalidValue {
                key: key.to_string(),
                reason: String::from("Exif tags take a single value"),
            })
        }
        (Key::Iptc(_), []) => image.delete_iptc_tag(key)?,
        (Key::Iptc(_), values) => image.set_iptc_tag_values(key, values)?,
        (Key::Xmp(_), []) => image.delete_xmp_tag(key)?,
        (Key::Xmp(_), [value]) => image.set_xmp_tag_text_value(key, value)?,
        (Key::Xmp(_), values) => image.set_xmp_tag_array_value(key, values)?,
    }

    tracing::debug!("Writing {path}");
    image.write_metadata()
}
