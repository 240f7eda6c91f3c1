use imgmeta::{Container, Image};
use tracing_subscriber::prelude::*;

fn main() {
    let path = std::env::args().nth(1).unwrap();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let image = Image::open(path).unwrap();

    match image.container() {
        Container::Png(png) => show_png(png),
        Container::Jpeg(jpeg) => show_jpeg(jpeg),
        Container::Tiff(tiff) => show_tiff(tiff),
        unknown => panic!("Unknown file type: {unknown:?}"),
    }
}

fn show_png(png: &imgmeta::png::Png) {
    fn show_repeats(n: &mut u32, chunk_type: &imgmeta::png::ChunkType) {
        if *n > 1 {
            println!(" - {chunk_type:?} ({n}x)");
            *n = 1;
        } else {
            println!(" - {chunk_type:?}");
        }
    }

    println!("PNG Chunks:");
    let mut chunks = png.chunks().into_iter().map(|x| x.chunk_type());
    let Some(mut last_type) = chunks.next() else {
        return;
    };
    let mut n_repeats: u32 = 1;
    for chunk_type in chunks {
        if chunk_type != last_type {
            show_repeats(&mut n_repeats, &last_type);
            last_type = chunk_type;
        } else {
            n_repeats = n_repeats.saturating_add(1);
        }
    }
    show_repeats(&mut n_repeats, &last_type);
}

fn show_jpeg(jpeg: &imgmeta::jpeg::Jpeg) {
    println!("JPEG Segments:");
    for segment in jpeg.segments() {
        println!(
            " - {:?} at {} ({} bytes)",
            segment.marker(),
            segment.pos(),
            segment.data().len()
        );
    }
    println!("Entropy-coded data: {} bytes", jpeg.entropy_coded_data().len());
}

fn show_tiff(tiff: &imgmeta::tiff::Tiff) {
    println!("TIFF ({:?})", tiff.byte_order());
    let decoded = tiff.decode().unwrap();

    let mut last_ifd = None;
    for datum in &decoded.entries {
        let key = datum.key();
        if last_ifd != Some(key.ifd) {
            println!("{:?}:", key.ifd);
            last_ifd = Some(key.ifd);
        }
        println!(
            " - {key} {:?}[{}] ({} bytes)",
            datum.type_(),
            datum.count(),
            datum.data().len()
        );
    }
    if decoded.next_ifd != 0 {
        println!("Next IFD at {}", decoded.next_ifd);
    }
}
