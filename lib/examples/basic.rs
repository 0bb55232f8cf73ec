/// Basic example: transcode a small generated image and print it
///
/// Draws a red square on a grey background, then prints the rows once with
/// the default token layout and once with the RGB layout.
use asciiart::{TokenLayout, TranscodeConfig, transcode_image};
use image::{Rgba, RgbaImage};

fn main() {
    println!("asciiart - Basic Example");
    println!("========================\n");

    let width = 12;
    let height = 6;
    let img = RgbaImage::from_fn(width, height, |x, y| {
        if (3..9).contains(&x) && (1..5).contains(&y) {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([100, 100, 100, 255])
        }
    });

    println!("Created test image: {}x{}\n", width, height);

    let config = TranscodeConfig::default();
    let lines = transcode_image(&img, &config).expect("Failed to transcode");
    println!("Default layout ({:?}):", config.layout);
    for line in &lines {
        println!("{line}");
    }

    let config = TranscodeConfig {
        layout: TokenLayout::Rgb,
        ..Default::default()
    };
    let lines = transcode_image(&img, &config).expect("Failed to transcode");
    println!("\nCorrected layout ({:?}):", config.layout);
    for line in &lines {
        println!("{line}");
    }
}
